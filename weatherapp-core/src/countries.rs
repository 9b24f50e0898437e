//! ISO 3166-1 alpha-2 lookup used to encode outgoing queries and decode the
//! provider's `sys.country` field.

#[derive(Debug, Clone, Copy)]
struct Country {
    code: &'static str,
    short_name: &'static str,
    aliases: &'static [&'static str],
}

const fn country(
    code: &'static str,
    short_name: &'static str,
    aliases: &'static [&'static str],
) -> Country {
    Country { code, short_name, aliases }
}

static COUNTRIES: &[Country] = &[
    country("AD", "Andorra", &[]),
    country("AE", "United Arab Emirates", &["UAE", "Emirates"]),
    country("AF", "Afghanistan", &[]),
    country("AG", "Antigua and Barbuda", &["Antigua"]),
    country("AI", "Anguilla", &[]),
    country("AL", "Albania", &[]),
    country("AM", "Armenia", &[]),
    country("AO", "Angola", &[]),
    country("AQ", "Antarctica", &[]),
    country("AR", "Argentina", &[]),
    country("AS", "American Samoa", &[]),
    country("AT", "Austria", &[]),
    country("AU", "Australia", &[]),
    country("AW", "Aruba", &[]),
    country("AX", "Aland Islands", &["Åland Islands"]),
    country("AZ", "Azerbaijan", &[]),
    country("BA", "Bosnia and Herzegovina", &["Bosnia"]),
    country("BB", "Barbados", &[]),
    country("BD", "Bangladesh", &[]),
    country("BE", "Belgium", &[]),
    country("BF", "Burkina Faso", &[]),
    country("BG", "Bulgaria", &[]),
    country("BH", "Bahrain", &[]),
    country("BI", "Burundi", &[]),
    country("BJ", "Benin", &[]),
    country("BL", "St. Barths", &["Saint Barthelemy", "Saint Barthélemy"]),
    country("BM", "Bermuda", &[]),
    country("BN", "Brunei Darussalam", &["Brunei"]),
    country("BO", "Bolivia", &[]),
    country("BQ", "Bonaire, Saint Eustatius and Saba", &["Caribbean Netherlands"]),
    country("BR", "Brazil", &[]),
    country("BS", "Bahamas", &["The Bahamas"]),
    country("BT", "Bhutan", &[]),
    country("BV", "Bouvet Island", &[]),
    country("BW", "Botswana", &[]),
    country("BY", "Belarus", &[]),
    country("BZ", "Belize", &[]),
    country("CA", "Canada", &[]),
    country("CC", "Cocos (Keeling) Islands", &["Cocos Islands"]),
    country("CD", "DR Congo", &["Democratic Republic of the Congo", "Congo-Kinshasa"]),
    country("CF", "Central African Republic", &[]),
    country("CG", "Congo Republic", &["Republic of the Congo", "Congo", "Congo-Brazzaville"]),
    country("CH", "Switzerland", &[]),
    country("CI", "Cote d'Ivoire", &["Côte d'Ivoire", "Ivory Coast"]),
    country("CK", "Cook Islands", &[]),
    country("CL", "Chile", &[]),
    country("CM", "Cameroon", &[]),
    country("CN", "China", &["People's Republic of China", "PRC"]),
    country("CO", "Colombia", &[]),
    country("CR", "Costa Rica", &[]),
    country("CU", "Cuba", &[]),
    country("CV", "Cabo Verde", &["Cape Verde"]),
    country("CW", "Curacao", &["Curaçao"]),
    country("CX", "Christmas Island", &[]),
    country("CY", "Cyprus", &[]),
    country("CZ", "Czech Republic", &["Czechia"]),
    country("DE", "Germany", &["Deutschland"]),
    country("DJ", "Djibouti", &[]),
    country("DK", "Denmark", &[]),
    country("DM", "Dominica", &[]),
    country("DO", "Dominican Republic", &[]),
    country("DZ", "Algeria", &[]),
    country("EC", "Ecuador", &[]),
    country("EE", "Estonia", &[]),
    country("EG", "Egypt", &[]),
    country("EH", "Western Sahara", &[]),
    country("ER", "Eritrea", &[]),
    country("ES", "Spain", &["España"]),
    country("ET", "Ethiopia", &[]),
    country("FI", "Finland", &[]),
    country("FJ", "Fiji", &[]),
    country("FK", "Falkland Islands", &["Falklands"]),
    country("FM", "Micronesia, Fed. Sts.", &["Micronesia", "Federated States of Micronesia"]),
    country("FO", "Faeroe Islands", &["Faroe Islands"]),
    country("FR", "France", &[]),
    country("GA", "Gabon", &[]),
    country("GB", "United Kingdom", &["UK", "Great Britain", "Britain", "England", "Scotland", "Wales"]),
    country("GD", "Grenada", &[]),
    country("GE", "Georgia", &[]),
    country("GF", "French Guiana", &[]),
    country("GG", "Guernsey", &[]),
    country("GH", "Ghana", &[]),
    country("GI", "Gibraltar", &[]),
    country("GL", "Greenland", &[]),
    country("GM", "Gambia", &["The Gambia"]),
    country("GN", "Guinea", &[]),
    country("GP", "Guadeloupe", &[]),
    country("GQ", "Equatorial Guinea", &[]),
    country("GR", "Greece", &[]),
    country("GS", "South Georgia and South Sandwich Is.", &["South Georgia"]),
    country("GT", "Guatemala", &[]),
    country("GU", "Guam", &[]),
    country("GW", "Guinea-Bissau", &[]),
    country("GY", "Guyana", &[]),
    country("HK", "Hong Kong", &[]),
    country("HM", "Heard and McDonald Islands", &[]),
    country("HN", "Honduras", &[]),
    country("HR", "Croatia", &[]),
    country("HT", "Haiti", &[]),
    country("HU", "Hungary", &[]),
    country("ID", "Indonesia", &[]),
    country("IE", "Ireland", &["Eire"]),
    country("IL", "Israel", &[]),
    country("IM", "Isle of Man", &[]),
    country("IN", "India", &[]),
    country("IO", "British Indian Ocean Territory", &[]),
    country("IQ", "Iraq", &[]),
    country("IR", "Iran", &["Islamic Republic of Iran"]),
    country("IS", "Iceland", &[]),
    country("IT", "Italy", &["Italia"]),
    country("JE", "Jersey", &[]),
    country("JM", "Jamaica", &[]),
    country("JO", "Jordan", &[]),
    country("JP", "Japan", &[]),
    country("KE", "Kenya", &[]),
    country("KG", "Kyrgyz Republic", &["Kyrgyzstan"]),
    country("KH", "Cambodia", &[]),
    country("KI", "Kiribati", &[]),
    country("KM", "Comoros", &[]),
    country("KN", "St. Kitts and Nevis", &["Saint Kitts and Nevis"]),
    country("KP", "North Korea", &["Democratic People's Republic of Korea", "DPRK"]),
    country("KR", "South Korea", &["Republic of Korea", "Korea"]),
    country("KW", "Kuwait", &[]),
    country("KY", "Cayman Islands", &[]),
    country("KZ", "Kazakhstan", &[]),
    country("LA", "Laos", &["Lao People's Democratic Republic"]),
    country("LB", "Lebanon", &[]),
    country("LC", "St. Lucia", &["Saint Lucia"]),
    country("LI", "Liechtenstein", &[]),
    country("LK", "Sri Lanka", &[]),
    country("LR", "Liberia", &[]),
    country("LS", "Lesotho", &[]),
    country("LT", "Lithuania", &[]),
    country("LU", "Luxembourg", &[]),
    country("LV", "Latvia", &[]),
    country("LY", "Libya", &[]),
    country("MA", "Morocco", &[]),
    country("MC", "Monaco", &[]),
    country("MD", "Moldova", &["Republic of Moldova"]),
    country("ME", "Montenegro", &[]),
    country("MF", "Saint-Martin", &["Saint Martin"]),
    country("MG", "Madagascar", &[]),
    country("MH", "Marshall Islands", &[]),
    country("MK", "North Macedonia", &["Macedonia"]),
    country("ML", "Mali", &[]),
    country("MM", "Myanmar", &["Burma"]),
    country("MN", "Mongolia", &[]),
    country("MO", "Macau", &["Macao"]),
    country("MP", "Northern Mariana Islands", &[]),
    country("MQ", "Martinique", &[]),
    country("MR", "Mauritania", &[]),
    country("MS", "Montserrat", &[]),
    country("MT", "Malta", &[]),
    country("MU", "Mauritius", &[]),
    country("MV", "Maldives", &[]),
    country("MW", "Malawi", &[]),
    country("MX", "Mexico", &["México"]),
    country("MY", "Malaysia", &[]),
    country("MZ", "Mozambique", &[]),
    country("NA", "Namibia", &[]),
    country("NC", "New Caledonia", &[]),
    country("NE", "Niger", &[]),
    country("NF", "Norfolk Island", &[]),
    country("NG", "Nigeria", &[]),
    country("NI", "Nicaragua", &[]),
    country("NL", "Netherlands", &["The Netherlands", "Holland"]),
    country("NO", "Norway", &[]),
    country("NP", "Nepal", &[]),
    country("NR", "Nauru", &[]),
    country("NU", "Niue", &[]),
    country("NZ", "New Zealand", &[]),
    country("OM", "Oman", &[]),
    country("PA", "Panama", &[]),
    country("PE", "Peru", &[]),
    country("PF", "French Polynesia", &[]),
    country("PG", "Papua New Guinea", &[]),
    country("PH", "Philippines", &[]),
    country("PK", "Pakistan", &[]),
    country("PL", "Poland", &[]),
    country("PM", "St. Pierre and Miquelon", &["Saint Pierre and Miquelon"]),
    country("PN", "Pitcairn", &["Pitcairn Islands"]),
    country("PR", "Puerto Rico", &[]),
    country("PS", "Palestine", &["State of Palestine"]),
    country("PT", "Portugal", &[]),
    country("PW", "Palau", &[]),
    country("PY", "Paraguay", &[]),
    country("QA", "Qatar", &[]),
    country("RE", "Reunion", &["Réunion"]),
    country("RO", "Romania", &[]),
    country("RS", "Serbia", &[]),
    country("RU", "Russia", &["Russian Federation"]),
    country("RW", "Rwanda", &[]),
    country("SA", "Saudi Arabia", &[]),
    country("SB", "Solomon Islands", &[]),
    country("SC", "Seychelles", &[]),
    country("SD", "Sudan", &[]),
    country("SE", "Sweden", &[]),
    country("SG", "Singapore", &[]),
    country("SH", "St. Helena", &["Saint Helena"]),
    country("SI", "Slovenia", &[]),
    country("SJ", "Svalbard and Jan Mayen Islands", &["Svalbard"]),
    country("SK", "Slovakia", &[]),
    country("SL", "Sierra Leone", &[]),
    country("SM", "San Marino", &[]),
    country("SN", "Senegal", &[]),
    country("SO", "Somalia", &[]),
    country("SR", "Suriname", &[]),
    country("SS", "South Sudan", &[]),
    country("ST", "Sao Tome and Principe", &["São Tomé and Príncipe"]),
    country("SV", "El Salvador", &[]),
    country("SX", "Sint Maarten", &[]),
    country("SY", "Syria", &["Syrian Arab Republic"]),
    country("SZ", "Eswatini", &["Swaziland"]),
    country("TC", "Turks and Caicos Islands", &[]),
    country("TD", "Chad", &[]),
    country("TF", "French Southern Territories", &[]),
    country("TG", "Togo", &[]),
    country("TH", "Thailand", &[]),
    country("TJ", "Tajikistan", &[]),
    country("TK", "Tokelau", &[]),
    country("TL", "Timor-Leste", &["East Timor"]),
    country("TM", "Turkmenistan", &[]),
    country("TN", "Tunisia", &[]),
    country("TO", "Tonga", &[]),
    country("TR", "Turkey", &["Türkiye", "Turkiye"]),
    country("TT", "Trinidad and Tobago", &["Trinidad"]),
    country("TV", "Tuvalu", &[]),
    country("TW", "Taiwan", &[]),
    country("TZ", "Tanzania", &["United Republic of Tanzania"]),
    country("UA", "Ukraine", &[]),
    country("UG", "Uganda", &[]),
    country("UM", "United States Minor Outlying Islands", &[]),
    country("US", "United States", &["United States of America", "USA", "America", "U.S.", "U.S.A."]),
    country("UY", "Uruguay", &[]),
    country("UZ", "Uzbekistan", &[]),
    country("VA", "Holy See", &["Vatican", "Vatican City"]),
    country("VC", "St. Vincent and the Grenadines", &["Saint Vincent and the Grenadines"]),
    country("VE", "Venezuela", &[]),
    country("VG", "British Virgin Islands", &[]),
    country("VI", "United States Virgin Islands", &["US Virgin Islands"]),
    country("VN", "Vietnam", &["Viet Nam"]),
    country("VU", "Vanuatu", &[]),
    country("WF", "Wallis and Futuna Islands", &["Wallis and Futuna"]),
    country("WS", "Samoa", &[]),
    country("XK", "Kosovo", &[]),
    country("YE", "Yemen", &[]),
    country("YT", "Mayotte", &[]),
    country("ZA", "South Africa", &[]),
    country("ZM", "Zambia", &[]),
    country("ZW", "Zimbabwe", &[]),
];

/// Resolve a free-text country (name, common alias or ISO2 code) to its
/// ISO 3166-1 alpha-2 code. Matching ignores case and repeated whitespace.
pub fn to_iso2(input: &str) -> Option<&'static str> {
    let wanted = normalize_key(input);
    if wanted.is_empty() {
        return None;
    }

    COUNTRIES
        .iter()
        .find(|c| {
            c.code.eq_ignore_ascii_case(&wanted)
                || normalize_key(c.short_name) == wanted
                || c.aliases.iter().any(|a| normalize_key(a) == wanted)
        })
        .map(|c| c.code)
}

/// Short display name for an ISO2 code, e.g. `GB` → `United Kingdom`.
pub fn short_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .map(|c| c.short_name)
}

fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
