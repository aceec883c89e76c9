// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Calling code allocations after ITU-T E.164 and its national annexes.
// Local lengths are the subscriber digit counts left after the country code
// and region prefix; an empty list marks a code that is allocated but not
// dialable. Ranks are populations in thousands, 0 for shared services.

use super::prefix_record::PrefixRecord;
use crate::macros::raw_record;

pub(super) struct RawRecord {
    pub country_code: &'static str,
    pub region_prefixes: &'static [&'static str],
    pub name: &'static str,
    pub iso_country: Option<&'static str>,
    pub international_access_prefix: Option<&'static str>,
    pub national_trunk_prefix: Option<&'static str>,
    pub local_lengths: &'static [usize],
    pub rank: u32,
}

impl RawRecord {
    pub(super) fn to_record(&self) -> PrefixRecord {
        let record = PrefixRecord::new(self.country_code, self.name)
            .with_region_prefixes(self.region_prefixes.iter().copied())
            .with_dialing_prefixes(self.international_access_prefix, self.national_trunk_prefix)
            .with_local_lengths(self.local_lengths.iter().copied())
            .with_rank(self.rank);
        match self.iso_country {
            Some(iso) => record.with_iso_country(iso),
            None => record,
        }
    }
}

const IDD: Option<&str> = Some("00");
const TRUNK: Option<&str> = Some("0");
const NANP_IDD: Option<&str> = Some("011");
const NANP_TRUNK: Option<&str> = Some("1");

pub(super) const REFERENCE_RECORDS: &[RawRecord] = &[
    // =========================================================================
    // ZONE 1: NORTH AMERICAN NUMBERING PLAN
    // =========================================================================
    raw_record!("1", [], "United States", Some("US"), NANP_IDD, NANP_TRUNK, [10], 331_900),
    raw_record!("1", [
        "204", "226", "236", "249", "250", "263", "289", "306", "343", "354",
        "365", "367", "368", "382", "403", "416", "418", "428", "431", "437",
        "438", "450", "468", "474", "506", "514", "519", "548", "579", "581",
        "584", "587", "604", "613", "639", "647", "672", "683", "705", "709",
        "742", "753", "778", "780", "782", "807", "819", "825", "867", "873",
        "879", "902", "905",
    ], "Canada", Some("CA"), NANP_IDD, NANP_TRUNK, [7], 38_900),
    raw_record!("1", ["242"], "Bahamas", Some("BS"), NANP_IDD, NANP_TRUNK, [7], 410),
    raw_record!("1", ["246"], "Barbados", Some("BB"), NANP_IDD, NANP_TRUNK, [7], 282),
    raw_record!("1", ["264"], "Anguilla", Some("AI"), NANP_IDD, NANP_TRUNK, [7], 15),
    raw_record!("1", ["268"], "Antigua and Barbuda", Some("AG"), NANP_IDD, NANP_TRUNK, [7], 94),
    raw_record!("1", ["284"], "British Virgin Islands", Some("VG"), NANP_IDD, NANP_TRUNK, [7], 31),
    raw_record!("1", ["340"], "U.S. Virgin Islands", Some("VI"), NANP_IDD, NANP_TRUNK, [7], 87),
    raw_record!("1", ["345"], "Cayman Islands", Some("KY"), NANP_IDD, NANP_TRUNK, [7], 69),
    raw_record!("1", ["441"], "Bermuda", Some("BM"), NANP_IDD, NANP_TRUNK, [7], 64),
    raw_record!("1", ["473"], "Grenada", Some("GD"), NANP_IDD, NANP_TRUNK, [7], 126),
    raw_record!("1", ["649"], "Turks and Caicos Islands", Some("TC"), NANP_IDD, NANP_TRUNK, [7], 46),
    raw_record!("1", ["658", "876"], "Jamaica", Some("JM"), NANP_IDD, NANP_TRUNK, [7], 2_830),
    raw_record!("1", ["664"], "Montserrat", Some("MS"), NANP_IDD, NANP_TRUNK, [7], 5),
    raw_record!("1", ["670"], "Northern Mariana Islands", Some("MP"), NANP_IDD, NANP_TRUNK, [7], 47),
    raw_record!("1", ["671"], "Guam", Some("GU"), NANP_IDD, NANP_TRUNK, [7], 172),
    raw_record!("1", ["684"], "American Samoa", Some("AS"), NANP_IDD, NANP_TRUNK, [7], 44),
    raw_record!("1", ["721"], "Sint Maarten", Some("SX"), NANP_IDD, NANP_TRUNK, [7], 44),
    raw_record!("1", ["758"], "Saint Lucia", Some("LC"), NANP_IDD, NANP_TRUNK, [7], 180),
    raw_record!("1", ["767"], "Dominica", Some("DM"), NANP_IDD, NANP_TRUNK, [7], 73),
    raw_record!("1", ["784"], "Saint Vincent and the Grenadines", Some("VC"), NANP_IDD, NANP_TRUNK, [7], 104),
    raw_record!("1", ["787", "939"], "Puerto Rico", Some("PR"), NANP_IDD, NANP_TRUNK, [7], 3_220),
    raw_record!("1", ["809", "829", "849"], "Dominican Republic", Some("DO"), NANP_IDD, NANP_TRUNK, [7], 11_230),
    raw_record!("1", ["868"], "Trinidad and Tobago", Some("TT"), NANP_IDD, NANP_TRUNK, [7], 1_530),
    raw_record!("1", ["869"], "Saint Kitts and Nevis", Some("KN"), NANP_IDD, NANP_TRUNK, [7], 48),
    // =========================================================================
    // ZONE 2: AFRICA AND ATLANTIC
    // =========================================================================
    raw_record!("20", [], "Egypt", Some("EG"), IDD, TRUNK, [8, 9, 10], 109_000),
    raw_record!("211", [], "South Sudan", Some("SS"), IDD, TRUNK, [9], 11_000),
    raw_record!("212", [], "Morocco", Some("MA"), IDD, TRUNK, [9], 37_000),
    raw_record!("213", [], "Algeria", Some("DZ"), IDD, TRUNK, [8, 9], 44_000),
    raw_record!("216", [], "Tunisia", Some("TN"), IDD, None, [8], 12_000),
    raw_record!("218", [], "Libya", Some("LY"), IDD, TRUNK, [8, 9], 6_800),
    raw_record!("220", [], "Gambia", Some("GM"), IDD, None, [7], 2_600),
    raw_record!("221", [], "Senegal", Some("SN"), IDD, None, [9], 17_000),
    raw_record!("222", [], "Mauritania", Some("MR"), IDD, None, [8], 4_600),
    raw_record!("223", [], "Mali", Some("ML"), IDD, None, [8], 21_000),
    raw_record!("224", [], "Guinea", Some("GN"), IDD, None, [8, 9], 13_500),
    raw_record!("225", [], "Côte d'Ivoire", Some("CI"), IDD, None, [10], 27_000),
    raw_record!("226", [], "Burkina Faso", Some("BF"), IDD, None, [8], 21_000),
    raw_record!("227", [], "Niger", Some("NE"), IDD, None, [8], 25_000),
    raw_record!("228", [], "Togo", Some("TG"), IDD, None, [8], 8_500),
    raw_record!("229", [], "Benin", Some("BJ"), IDD, None, [8, 10], 13_000),
    raw_record!("230", [], "Mauritius", Some("MU"), Some("020"), None, [7, 8], 1_260),
    raw_record!("231", [], "Liberia", Some("LR"), IDD, TRUNK, [7, 8, 9], 5_200),
    raw_record!("232", [], "Sierra Leone", Some("SL"), IDD, TRUNK, [8], 8_400),
    raw_record!("233", [], "Ghana", Some("GH"), IDD, TRUNK, [9], 32_000),
    raw_record!("234", [], "Nigeria", Some("NG"), Some("009"), TRUNK, [8, 9, 10], 213_000),
    raw_record!("235", [], "Chad", Some("TD"), IDD, None, [8], 17_000),
    raw_record!("236", [], "Central African Republic", Some("CF"), IDD, None, [8], 4_900),
    raw_record!("237", [], "Cameroon", Some("CM"), IDD, None, [8, 9], 27_000),
    raw_record!("238", [], "Cape Verde", Some("CV"), Some("0"), None, [7], 560),
    raw_record!("239", [], "São Tomé and Príncipe", Some("ST"), IDD, None, [7], 220),
    raw_record!("240", [], "Equatorial Guinea", Some("GQ"), IDD, None, [9], 1_400),
    raw_record!("241", [], "Gabon", Some("GA"), IDD, None, [7, 8], 2_300),
    raw_record!("242", [], "Republic of the Congo", Some("CG"), IDD, None, [9], 5_600),
    raw_record!("243", [], "DR Congo", Some("CD"), IDD, TRUNK, [7, 8, 9], 92_000),
    raw_record!("244", [], "Angola", Some("AO"), IDD, None, [9], 34_000),
    raw_record!("245", [], "Guinea-Bissau", Some("GW"), IDD, None, [7, 9], 2_000),
    raw_record!("246", [], "British Indian Ocean Territory", Some("IO"), IDD, None, [7], 3),
    raw_record!("247", [], "Ascension Island", Some("AC"), IDD, None, [5, 6], 1),
    raw_record!("248", [], "Seychelles", Some("SC"), Some("010"), None, [7], 100),
    raw_record!("249", [], "Sudan", Some("SD"), IDD, TRUNK, [9], 45_000),
    raw_record!("250", [], "Rwanda", Some("RW"), IDD, TRUNK, [8, 9], 13_000),
    raw_record!("251", [], "Ethiopia", Some("ET"), IDD, TRUNK, [9], 118_000),
    raw_record!("252", [], "Somalia", Some("SO"), IDD, TRUNK, [7, 8, 9], 17_000),
    raw_record!("253", [], "Djibouti", Some("DJ"), IDD, None, [8], 1_000),
    raw_record!("254", [], "Kenya", Some("KE"), Some("000"), TRUNK, [9, 10], 53_000),
    raw_record!("255", [], "Tanzania", Some("TZ"), Some("000"), TRUNK, [9], 61_000),
    raw_record!("256", [], "Uganda", Some("UG"), Some("000"), TRUNK, [9], 46_000),
    raw_record!("257", [], "Burundi", Some("BI"), IDD, None, [8], 12_000),
    raw_record!("258", [], "Mozambique", Some("MZ"), IDD, None, [8, 9], 32_000),
    raw_record!("260", [], "Zambia", Some("ZM"), IDD, TRUNK, [9], 19_000),
    raw_record!("261", [], "Madagascar", Some("MG"), IDD, TRUNK, [9, 10], 28_000),
    raw_record!("262", [], "Réunion", Some("RE"), IDD, TRUNK, [9], 860),
    raw_record!("262", ["269", "639"], "Mayotte", Some("YT"), IDD, TRUNK, [6], 280),
    raw_record!("263", [], "Zimbabwe", Some("ZW"), IDD, TRUNK, [9], 15_000),
    raw_record!("264", [], "Namibia", Some("NA"), IDD, TRUNK, [8, 9], 2_500),
    raw_record!("265", [], "Malawi", Some("MW"), IDD, TRUNK, [7, 9], 19_000),
    raw_record!("266", [], "Lesotho", Some("LS"), IDD, None, [8], 2_100),
    raw_record!("267", [], "Botswana", Some("BW"), IDD, None, [7, 8], 2_400),
    raw_record!("268", [], "Eswatini", Some("SZ"), IDD, None, [8], 1_200),
    raw_record!("269", [], "Comoros", Some("KM"), IDD, None, [7], 820),
    raw_record!("27", [], "South Africa", Some("ZA"), IDD, TRUNK, [9], 60_000),
    raw_record!("290", [], "Saint Helena", Some("SH"), IDD, None, [4, 5], 5),
    raw_record!("291", [], "Eritrea", Some("ER"), IDD, TRUNK, [7], 3_600),
    raw_record!("297", [], "Aruba", Some("AW"), IDD, None, [7], 107),
    raw_record!("298", [], "Faroe Islands", Some("FO"), IDD, None, [6], 53),
    raw_record!("299", [], "Greenland", Some("GL"), IDD, None, [6], 56),
    // =========================================================================
    // ZONES 3 AND 4: EUROPE
    // =========================================================================
    raw_record!("30", [], "Greece", Some("GR"), IDD, None, [10], 10_400),
    raw_record!("31", [], "Netherlands", Some("NL"), IDD, TRUNK, [9], 17_500),
    raw_record!("32", [], "Belgium", Some("BE"), IDD, TRUNK, [8, 9], 11_600),
    raw_record!("33", [], "France", Some("FR"), IDD, TRUNK, [9], 67_800),
    raw_record!("34", [], "Spain", Some("ES"), IDD, None, [9], 47_400),
    raw_record!("350", [], "Gibraltar", Some("GI"), IDD, None, [8], 34),
    raw_record!("351", [], "Portugal", Some("PT"), IDD, None, [9], 10_300),
    raw_record!("352", [], "Luxembourg", Some("LU"), IDD, None, [4, 5, 6, 7, 8, 9, 10, 11], 640),
    raw_record!("353", [], "Ireland", Some("IE"), IDD, TRUNK, [7, 8, 9], 5_000),
    raw_record!("354", [], "Iceland", Some("IS"), IDD, None, [7, 9], 370),
    raw_record!("355", [], "Albania", Some("AL"), IDD, TRUNK, [8, 9], 2_800),
    raw_record!("356", [], "Malta", Some("MT"), IDD, None, [8], 520),
    raw_record!("357", [], "Cyprus", Some("CY"), IDD, None, [8], 1_200),
    raw_record!("358", [], "Finland", Some("FI"), IDD, TRUNK, [5, 6, 7, 8, 9, 10, 11, 12], 5_500),
    raw_record!("358", ["18"], "Åland Islands", Some("AX"), IDD, TRUNK, [6, 7, 8], 30),
    raw_record!("359", [], "Bulgaria", Some("BG"), IDD, TRUNK, [8, 9], 6_900),
    raw_record!("36", [], "Hungary", Some("HU"), IDD, Some("06"), [8, 9], 9_700),
    raw_record!("370", [], "Lithuania", Some("LT"), IDD, Some("8"), [8], 2_800),
    raw_record!("371", [], "Latvia", Some("LV"), IDD, None, [8], 1_900),
    raw_record!("372", [], "Estonia", Some("EE"), IDD, None, [7, 8], 1_330),
    raw_record!("373", [], "Moldova", Some("MD"), IDD, TRUNK, [8], 2_600),
    raw_record!("374", [], "Armenia", Some("AM"), IDD, TRUNK, [8], 2_800),
    raw_record!("375", [], "Belarus", Some("BY"), Some("810"), Some("8"), [9], 9_400),
    raw_record!("376", [], "Andorra", Some("AD"), IDD, None, [6, 8, 9], 79),
    raw_record!("377", [], "Monaco", Some("MC"), IDD, TRUNK, [8, 9], 39),
    raw_record!("378", [], "San Marino", Some("SM"), IDD, None, [6, 8, 10], 34),
    raw_record!("379", [], "Vatican City", Some("VA"), IDD, None, [], 1),
    raw_record!("380", [], "Ukraine", Some("UA"), IDD, TRUNK, [9], 41_000),
    raw_record!("381", [], "Serbia", Some("RS"), IDD, TRUNK, [8, 9], 6_800),
    raw_record!("382", [], "Montenegro", Some("ME"), IDD, TRUNK, [8], 620),
    raw_record!("383", [], "Kosovo", Some("XK"), IDD, TRUNK, [8], 1_800),
    raw_record!("385", [], "Croatia", Some("HR"), IDD, TRUNK, [8, 9], 3_900),
    raw_record!("386", [], "Slovenia", Some("SI"), IDD, TRUNK, [8], 2_100),
    raw_record!("387", [], "Bosnia and Herzegovina", Some("BA"), IDD, TRUNK, [8], 3_300),
    raw_record!("389", [], "North Macedonia", Some("MK"), IDD, TRUNK, [8], 1_800),
    raw_record!("39", [], "Italy", Some("IT"), IDD, None, [6, 7, 8, 9, 10, 11], 59_000),
    raw_record!("39", ["06698"], "Vatican City", Some("VA"), IDD, None, [5], 1),
    raw_record!("40", [], "Romania", Some("RO"), IDD, TRUNK, [9], 19_000),
    raw_record!("41", [], "Switzerland", Some("CH"), IDD, TRUNK, [9], 8_700),
    raw_record!("420", [], "Czech Republic", Some("CZ"), IDD, None, [9], 10_500),
    raw_record!("421", [], "Slovakia", Some("SK"), IDD, TRUNK, [9], 5_400),
    raw_record!("423", [], "Liechtenstein", Some("LI"), IDD, None, [7, 9], 39),
    raw_record!("43", [], "Austria", Some("AT"), IDD, TRUNK, [4, 5, 6, 7, 8, 9, 10, 11, 12, 13], 9_000),
    raw_record!("44", [], "United Kingdom", Some("GB"), IDD, TRUNK, [9, 10], 67_300),
    raw_record!("44", ["1481", "7781", "7839", "7911"], "Guernsey", Some("GG"), IDD, TRUNK, [6], 63),
    raw_record!("44", ["1534", "7509", "7700", "7797", "7829", "7937"], "Jersey", Some("JE"), IDD, TRUNK, [6], 100),
    raw_record!("44", ["1624", "7524", "7624", "7924"], "Isle of Man", Some("IM"), IDD, TRUNK, [6], 85),
    raw_record!("45", [], "Denmark", Some("DK"), IDD, None, [8], 5_850),
    raw_record!("46", [], "Sweden", Some("SE"), IDD, TRUNK, [7, 8, 9, 10, 12, 13], 10_400),
    raw_record!("47", [], "Norway", Some("NO"), IDD, None, [5, 8], 5_400),
    raw_record!("47", ["79"], "Svalbard and Jan Mayen", Some("SJ"), IDD, None, [6], 3),
    raw_record!("48", [], "Poland", Some("PL"), IDD, None, [9], 37_800),
    raw_record!("49", [], "Germany", Some("DE"), IDD, TRUNK, [6, 7, 8, 9, 10, 11, 12, 13], 83_200),
    // =========================================================================
    // ZONE 5: CENTRAL AND SOUTH AMERICA
    // =========================================================================
    raw_record!("500", [], "Falkland Islands", Some("FK"), IDD, None, [5], 4),
    raw_record!("501", [], "Belize", Some("BZ"), IDD, None, [7], 400),
    raw_record!("502", [], "Guatemala", Some("GT"), IDD, None, [8], 17_000),
    raw_record!("503", [], "El Salvador", Some("SV"), IDD, None, [8], 6_300),
    raw_record!("504", [], "Honduras", Some("HN"), IDD, None, [8], 10_000),
    raw_record!("505", [], "Nicaragua", Some("NI"), IDD, None, [8], 6_700),
    raw_record!("506", [], "Costa Rica", Some("CR"), IDD, None, [8], 5_100),
    raw_record!("507", [], "Panama", Some("PA"), IDD, None, [7, 8], 4_300),
    raw_record!("508", [], "Saint Pierre and Miquelon", Some("PM"), IDD, TRUNK, [6], 6),
    raw_record!("509", [], "Haiti", Some("HT"), IDD, None, [8], 11_400),
    raw_record!("51", [], "Peru", Some("PE"), IDD, TRUNK, [8, 9], 33_000),
    raw_record!("52", [], "Mexico", Some("MX"), IDD, None, [10], 126_700),
    raw_record!("53", [], "Cuba", Some("CU"), Some("119"), TRUNK, [6, 7, 8], 11_300),
    raw_record!("54", [], "Argentina", Some("AR"), IDD, TRUNK, [10], 45_400),
    raw_record!("55", [], "Brazil", Some("BR"), IDD, TRUNK, [10, 11], 214_000),
    raw_record!("56", [], "Chile", Some("CL"), IDD, None, [9], 19_500),
    raw_record!("57", [], "Colombia", Some("CO"), IDD, TRUNK, [10], 51_500),
    raw_record!("58", [], "Venezuela", Some("VE"), IDD, TRUNK, [10], 28_200),
    raw_record!("590", [], "Guadeloupe", Some("GP"), IDD, TRUNK, [9], 400),
    raw_record!("590", [], "Saint Barthélemy", Some("BL"), IDD, TRUNK, [9], 10),
    raw_record!("590", [], "Saint Martin", Some("MF"), IDD, TRUNK, [9], 32),
    raw_record!("591", [], "Bolivia", Some("BO"), IDD, TRUNK, [8], 12_000),
    raw_record!("592", [], "Guyana", Some("GY"), Some("001"), None, [7], 800),
    raw_record!("593", [], "Ecuador", Some("EC"), IDD, TRUNK, [8, 9], 17_800),
    raw_record!("594", [], "French Guiana", Some("GF"), IDD, TRUNK, [9], 300),
    raw_record!("595", [], "Paraguay", Some("PY"), IDD, TRUNK, [9], 7_200),
    raw_record!("596", [], "Martinique", Some("MQ"), IDD, TRUNK, [9], 360),
    raw_record!("597", [], "Suriname", Some("SR"), IDD, None, [6, 7], 610),
    raw_record!("598", [], "Uruguay", Some("UY"), IDD, TRUNK, [8], 3_500),
    raw_record!("599", ["9"], "Curaçao", Some("CW"), IDD, TRUNK, [7], 150),
    raw_record!("599", ["3", "4", "7"], "Caribbean Netherlands", Some("BQ"), IDD, None, [6], 26),
    // =========================================================================
    // ZONE 6: SOUTH-EAST ASIA AND OCEANIA
    // =========================================================================
    raw_record!("60", [], "Malaysia", Some("MY"), IDD, TRUNK, [8, 9, 10], 33_000),
    raw_record!("61", [], "Australia", Some("AU"), Some("0011"), TRUNK, [9], 25_700),
    raw_record!("61", ["89164"], "Christmas Island", Some("CX"), Some("0011"), TRUNK, [4], 2),
    raw_record!("61", ["89162"], "Cocos (Keeling) Islands", Some("CC"), Some("0011"), TRUNK, [4], 1),
    raw_record!("62", [], "Indonesia", Some("ID"), Some("001"), TRUNK, [8, 9, 10, 11, 12], 273_000),
    raw_record!("63", [], "Philippines", Some("PH"), IDD, TRUNK, [8, 9, 10], 111_000),
    raw_record!("64", [], "New Zealand", Some("NZ"), IDD, TRUNK, [8, 9, 10], 5_100),
    raw_record!("65", [], "Singapore", Some("SG"), Some("000"), None, [8], 5_700),
    raw_record!("66", [], "Thailand", Some("TH"), Some("001"), TRUNK, [8, 9], 70_000),
    raw_record!("670", [], "Timor-Leste", Some("TL"), IDD, None, [7, 8], 1_300),
    raw_record!("672", ["1"], "Australian Antarctic Territory", Some("AQ"), IDD, None, [5], 1),
    raw_record!("672", ["3"], "Norfolk Island", Some("NF"), IDD, None, [5], 2),
    raw_record!("673", [], "Brunei", Some("BN"), IDD, None, [7], 440),
    raw_record!("674", [], "Nauru", Some("NR"), IDD, None, [7], 11),
    raw_record!("675", [], "Papua New Guinea", Some("PG"), Some("05"), None, [7, 8], 9_100),
    raw_record!("676", [], "Tonga", Some("TO"), IDD, None, [5, 7], 106),
    raw_record!("677", [], "Solomon Islands", Some("SB"), IDD, None, [5, 7], 700),
    raw_record!("678", [], "Vanuatu", Some("VU"), IDD, None, [5, 7], 310),
    raw_record!("679", [], "Fiji", Some("FJ"), IDD, None, [7], 900),
    raw_record!("680", [], "Palau", Some("PW"), Some("011"), None, [7], 18),
    raw_record!("681", [], "Wallis and Futuna", Some("WF"), IDD, None, [6], 11),
    raw_record!("682", [], "Cook Islands", Some("CK"), IDD, None, [5], 17),
    raw_record!("683", [], "Niue", Some("NU"), IDD, None, [4, 7], 2),
    raw_record!("685", [], "Samoa", Some("WS"), Some("0"), None, [5, 6, 7], 200),
    raw_record!("686", [], "Kiribati", Some("KI"), IDD, TRUNK, [5, 8], 120),
    raw_record!("687", [], "New Caledonia", Some("NC"), IDD, None, [6], 270),
    raw_record!("688", [], "Tuvalu", Some("TV"), IDD, None, [5, 6, 7], 11),
    raw_record!("689", [], "French Polynesia", Some("PF"), IDD, None, [8], 280),
    raw_record!("690", [], "Tokelau", Some("TK"), IDD, None, [4, 5, 6, 7], 1),
    raw_record!("691", [], "Micronesia", Some("FM"), Some("011"), None, [7], 110),
    raw_record!("692", [], "Marshall Islands", Some("MH"), Some("011"), Some("1"), [7], 42),
    // =========================================================================
    // ZONE 7: RUSSIA AND KAZAKHSTAN
    // =========================================================================
    raw_record!("7", [], "Russia", Some("RU"), Some("810"), Some("8"), [10], 146_000),
    raw_record!("7", ["6", "7"], "Kazakhstan", Some("KZ"), Some("810"), Some("8"), [9], 19_000),
    // =========================================================================
    // ZONE 8: EAST ASIA AND INTERNATIONAL SERVICES
    // =========================================================================
    raw_record!("800", [], "International Freephone", None, None, None, [8], 0),
    raw_record!("808", [], "International Shared Cost Service", None, None, None, [8], 0),
    raw_record!("81", [], "Japan", Some("JP"), Some("010"), TRUNK, [9, 10], 125_700),
    raw_record!("82", [], "South Korea", Some("KR"), Some("001"), TRUNK, [8, 9, 10], 51_700),
    raw_record!("84", [], "Vietnam", Some("VN"), IDD, TRUNK, [9, 10], 97_500),
    raw_record!("850", [], "North Korea", Some("KP"), IDD, TRUNK, [8, 10], 25_900),
    raw_record!("852", [], "Hong Kong", Some("HK"), Some("001"), None, [8], 7_400),
    raw_record!("853", [], "Macau", Some("MO"), IDD, None, [8], 680),
    raw_record!("855", [], "Cambodia", Some("KH"), Some("001"), TRUNK, [8, 9], 16_900),
    raw_record!("856", [], "Laos", Some("LA"), IDD, TRUNK, [8, 9, 10], 7_400),
    raw_record!("86", [], "China", Some("CN"), IDD, TRUNK, [9, 10, 11], 1_412_000),
    raw_record!("870", [], "Inmarsat", None, None, None, [9], 0),
    raw_record!("878", [], "Universal Personal Telecommunications", None, None, None, [12], 0),
    raw_record!("880", [], "Bangladesh", Some("BD"), IDD, TRUNK, [8, 9, 10], 169_000),
    raw_record!("881", [], "Global Mobile Satellite System", None, None, None, [], 0),
    raw_record!("882", [], "International Networks", None, None, None, [7, 8, 9, 10, 11, 12], 0),
    raw_record!("883", [], "International Networks", None, None, None, [9, 10, 11, 12], 0),
    raw_record!("886", [], "Taiwan", Some("TW"), Some("002"), TRUNK, [8, 9], 23_500),
    raw_record!("888", [], "Telecommunications for Disaster Relief", None, None, None, [9], 0),
    // =========================================================================
    // ZONE 9: WEST, CENTRAL AND SOUTH ASIA
    // =========================================================================
    raw_record!("90", [], "Turkey", Some("TR"), IDD, TRUNK, [10], 85_000),
    raw_record!("91", [], "India", Some("IN"), IDD, TRUNK, [10], 1_408_000),
    raw_record!("92", [], "Pakistan", Some("PK"), IDD, TRUNK, [9, 10], 231_000),
    raw_record!("93", [], "Afghanistan", Some("AF"), IDD, TRUNK, [9], 40_000),
    raw_record!("94", [], "Sri Lanka", Some("LK"), IDD, TRUNK, [9], 22_000),
    raw_record!("95", [], "Myanmar", Some("MM"), IDD, TRUNK, [7, 8, 9, 10], 54_000),
    raw_record!("960", [], "Maldives", Some("MV"), IDD, None, [7], 520),
    raw_record!("961", [], "Lebanon", Some("LB"), IDD, TRUNK, [7, 8], 5_600),
    raw_record!("962", [], "Jordan", Some("JO"), IDD, TRUNK, [8, 9], 11_100),
    raw_record!("963", [], "Syria", Some("SY"), IDD, TRUNK, [8, 9], 21_300),
    raw_record!("964", [], "Iraq", Some("IQ"), IDD, TRUNK, [8, 9, 10], 43_500),
    raw_record!("965", [], "Kuwait", Some("KW"), IDD, None, [8], 4_300),
    raw_record!("966", [], "Saudi Arabia", Some("SA"), IDD, TRUNK, [8, 9], 36_000),
    raw_record!("967", [], "Yemen", Some("YE"), IDD, TRUNK, [7, 8, 9], 33_000),
    raw_record!("968", [], "Oman", Some("OM"), IDD, None, [8], 4_500),
    raw_record!("970", [], "Palestine", Some("PS"), IDD, TRUNK, [8, 9], 5_200),
    raw_record!("971", [], "United Arab Emirates", Some("AE"), IDD, TRUNK, [8, 9], 9_400),
    raw_record!("972", [], "Israel", Some("IL"), IDD, TRUNK, [8, 9], 9_400),
    raw_record!("973", [], "Bahrain", Some("BH"), IDD, None, [8], 1_500),
    raw_record!("974", [], "Qatar", Some("QA"), IDD, None, [8], 2_700),
    raw_record!("975", [], "Bhutan", Some("BT"), IDD, None, [7, 8], 780),
    raw_record!("976", [], "Mongolia", Some("MN"), Some("001"), TRUNK, [8], 3_300),
    raw_record!("977", [], "Nepal", Some("NP"), IDD, TRUNK, [8, 10], 30_000),
    raw_record!("979", [], "International Premium Rate Service", None, None, None, [9], 0),
    raw_record!("98", [], "Iran", Some("IR"), IDD, TRUNK, [10], 88_000),
    raw_record!("991", [], "International Telecommunications Public Correspondence Service", None, None, None, [], 0),
    raw_record!("992", [], "Tajikistan", Some("TJ"), Some("810"), Some("8"), [9], 9_800),
    raw_record!("993", [], "Turkmenistan", Some("TM"), Some("810"), Some("8"), [8], 6_300),
    raw_record!("994", [], "Azerbaijan", Some("AZ"), IDD, TRUNK, [9], 10_100),
    raw_record!("995", [], "Georgia", Some("GE"), IDD, TRUNK, [9], 3_700),
    raw_record!("996", [], "Kyrgyzstan", Some("KG"), IDD, TRUNK, [9], 6_700),
    raw_record!("998", [], "Uzbekistan", Some("UZ"), Some("810"), Some("8"), [9], 34_900),
    raw_record!("999", [], "Reserved", None, None, None, [], 0),
];
