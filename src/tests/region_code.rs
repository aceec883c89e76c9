pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn bl() -> &'static str {
        "BL"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn gg() -> &'static str {
        "GG"
    }

    pub fn gp() -> &'static str {
        "GP"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn jm() -> &'static str {
        "JM"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn mf() -> &'static str {
        "MF"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn se() -> &'static str {
        "SE"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn va() -> &'static str {
        "VA"
    }

    /// Test-only country of the small test catalog.
    pub fn zz() -> &'static str {
        "ZZ"
    }
}
