//! Built-in country data for the phone input's country-code picker

use serde::Serialize;

/// One country entry: ISO 3166-1 alpha-2 code, display name, dial code,
/// and a flag glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryData {
	pub code: &'static str,
	pub name: &'static str,
	pub dial_code: &'static str,
	pub flag: &'static str,
}

/// The built-in country table. The first entry doubles as the fallback
/// for unknown codes.
pub static COUNTRIES: &[CountryData] = &[
	CountryData { code: "US", name: "United States", dial_code: "+1", flag: "🇺🇸" },
	CountryData { code: "GB", name: "United Kingdom", dial_code: "+44", flag: "🇬🇧" },
	CountryData { code: "CA", name: "Canada", dial_code: "+1", flag: "🇨🇦" },
	CountryData { code: "AU", name: "Australia", dial_code: "+61", flag: "🇦🇺" },
	CountryData { code: "IN", name: "India", dial_code: "+91", flag: "🇮🇳" },
	CountryData { code: "NP", name: "Nepal", dial_code: "+977", flag: "🇳🇵" },
	CountryData { code: "DE", name: "Germany", dial_code: "+49", flag: "🇩🇪" },
	CountryData { code: "FR", name: "France", dial_code: "+33", flag: "🇫🇷" },
	CountryData { code: "IT", name: "Italy", dial_code: "+39", flag: "🇮🇹" },
	CountryData { code: "ES", name: "Spain", dial_code: "+34", flag: "🇪🇸" },
	CountryData { code: "BR", name: "Brazil", dial_code: "+55", flag: "🇧🇷" },
	CountryData { code: "MX", name: "Mexico", dial_code: "+52", flag: "🇲🇽" },
	CountryData { code: "JP", name: "Japan", dial_code: "+81", flag: "🇯🇵" },
	CountryData { code: "KR", name: "South Korea", dial_code: "+82", flag: "🇰🇷" },
	CountryData { code: "CN", name: "China", dial_code: "+86", flag: "🇨🇳" },
	CountryData { code: "RU", name: "Russia", dial_code: "+7", flag: "🇷🇺" },
	CountryData { code: "ZA", name: "South Africa", dial_code: "+27", flag: "🇿🇦" },
	CountryData { code: "AE", name: "UAE", dial_code: "+971", flag: "🇦🇪" },
	CountryData { code: "SA", name: "Saudi Arabia", dial_code: "+966", flag: "🇸🇦" },
	CountryData { code: "SG", name: "Singapore", dial_code: "+65", flag: "🇸🇬" },
	CountryData { code: "MY", name: "Malaysia", dial_code: "+60", flag: "🇲🇾" },
	CountryData { code: "TH", name: "Thailand", dial_code: "+66", flag: "🇹🇭" },
	CountryData { code: "ID", name: "Indonesia", dial_code: "+62", flag: "🇮🇩" },
	CountryData { code: "PH", name: "Philippines", dial_code: "+63", flag: "🇵🇭" },
	CountryData { code: "PK", name: "Pakistan", dial_code: "+92", flag: "🇵🇰" },
	CountryData { code: "BD", name: "Bangladesh", dial_code: "+880", flag: "🇧🇩" },
	CountryData { code: "NG", name: "Nigeria", dial_code: "+234", flag: "🇳🇬" },
	CountryData { code: "EG", name: "Egypt", dial_code: "+20", flag: "🇪🇬" },
	CountryData { code: "TR", name: "Turkey", dial_code: "+90", flag: "🇹🇷" },
	CountryData { code: "NL", name: "Netherlands", dial_code: "+31", flag: "🇳🇱" },
	CountryData { code: "BE", name: "Belgium", dial_code: "+32", flag: "🇧🇪" },
	CountryData { code: "CH", name: "Switzerland", dial_code: "+41", flag: "🇨🇭" },
	CountryData { code: "AT", name: "Austria", dial_code: "+43", flag: "🇦🇹" },
	CountryData { code: "SE", name: "Sweden", dial_code: "+46", flag: "🇸🇪" },
	CountryData { code: "NO", name: "Norway", dial_code: "+47", flag: "🇳🇴" },
	CountryData { code: "DK", name: "Denmark", dial_code: "+45", flag: "🇩🇰" },
	CountryData { code: "FI", name: "Finland", dial_code: "+358", flag: "🇫🇮" },
	CountryData { code: "PL", name: "Poland", dial_code: "+48", flag: "🇵🇱" },
	CountryData { code: "PT", name: "Portugal", dial_code: "+351", flag: "🇵🇹" },
	CountryData { code: "IE", name: "Ireland", dial_code: "+353", flag: "🇮🇪" },
	CountryData { code: "NZ", name: "New Zealand", dial_code: "+64", flag: "🇳🇿" },
];

/// Look up a country by ISO code, case-insensitively. Unknown codes fall
/// back to the first table entry.
///
/// # Examples
///
/// ```
/// use auth_forms::countries::country_by_code;
///
/// assert_eq!(country_by_code("jp").name, "Japan");
/// assert_eq!(country_by_code("ZZ").code, "US");
/// ```
pub fn country_by_code(code: &str) -> &'static CountryData {
	COUNTRIES
		.iter()
		.find(|country| country.code.eq_ignore_ascii_case(code))
		.unwrap_or(&COUNTRIES[0])
}

/// Case-insensitive search over name, ISO code and dial code. An empty
/// or whitespace-only query returns the full table.
pub fn search_countries(query: &str) -> Vec<&'static CountryData> {
	let query = query.trim().to_lowercase();
	if query.is_empty() {
		return COUNTRIES.iter().collect();
	}
	COUNTRIES
		.iter()
		.filter(|country| {
			country.name.to_lowercase().contains(&query)
				|| country.code.to_lowercase().contains(&query)
				|| country.dial_code.contains(&query)
		})
		.collect()
}
