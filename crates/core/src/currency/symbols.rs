//! Currency symbol lookup.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use super::error::ConversionError;
use super::table::normalize_code;

/// Built-in symbols, keyed by ISO 4217 code.
const BUILTIN_SYMBOLS: &[(&str, &str)] = &[
    ("AED", "د.إ"),
    ("AFN", "؋"),
    ("ALL", "Lek"),
    ("AMD", "֏"),
    ("ANG", "ƒ"),
    ("AOA", "Kz"),
    ("ARS", "$"),
    ("AUD", "$"),
    ("AWG", "ƒ"),
    ("AZN", "₼"),
    ("BAM", "KM"),
    ("BBD", "$"),
    ("BDT", "৳"),
    ("BGN", "лв"),
    ("BHD", ".د.ب"),
    ("BIF", "FBu"),
    ("BMD", "$"),
    ("BND", "$"),
    ("BOB", "$b"),
    ("BRL", "R$"),
    ("BSD", "$"),
    ("BTC", "₿"),
    ("BTN", "Nu."),
    ("BWP", "P"),
    ("BYN", "Br"),
    ("BYR", "Br"),
    ("BZD", "BZ$"),
    ("CAD", "$"),
    ("CDF", "FC"),
    ("CHF", "CHF"),
    ("CLF", "UF"),
    ("CLP", "$"),
    ("CNH", "¥"),
    ("CNY", "¥"),
    ("COP", "$"),
    ("CRC", "₡"),
    ("CUC", "CUC$"),
    ("CUP", "₱"),
    ("CVE", "$"),
    ("CZK", "Kč"),
    ("DJF", "Fdj"),
    ("DKK", "kr"),
    ("DOP", "RD$"),
    ("DZD", "دج"),
    ("EGP", "£"),
    ("ERN", "Nfk"),
    ("ETB", "Br"),
    ("EUR", "€"),
    ("FJD", "$"),
    ("FKP", "£"),
    ("GBP", "£"),
    ("GEL", "₾"),
    ("GGP", "£"),
    ("GHS", "¢"),
    ("GIP", "£"),
    ("GMD", "D"),
    ("GNF", "FG"),
    ("GTQ", "Q"),
    ("GYD", "$"),
    ("HKD", "$"),
    ("HNL", "L"),
    ("HRK", "kn"),
    ("HTG", "G"),
    ("HUF", "Ft"),
    ("IDR", "Rp"),
    ("ILS", "₪"),
    ("IMP", "£"),
    ("INR", "₹"),
    ("IQD", "ع.د"),
    ("IRR", "﷼"),
    ("ISK", "kr"),
    ("JEP", "£"),
    ("JMD", "J$"),
    ("JOD", "JD"),
    ("JPY", "¥"),
    ("KES", "KSh"),
    ("KGS", "лв"),
    ("KHR", "៛"),
    ("KMF", "CF"),
    ("KPW", "₩"),
    ("KRW", "₩"),
    ("KWD", "KD"),
    ("KYD", "$"),
    ("KZT", "₸"),
    ("LAK", "₭"),
    ("LBP", "£"),
    ("LKR", "₨"),
    ("LRD", "$"),
    ("LSL", "M"),
    ("LTL", "Lt"),
    ("LVL", "Ls"),
    ("LYD", "LD"),
    ("MAD", "MAD"),
    ("MDL", "lei"),
    ("MGA", "Ar"),
    ("MKD", "ден"),
    ("MMK", "K"),
    ("MNT", "₮"),
    ("MOP", "MOP$"),
    ("MRO", "UM"),
    ("MRU", "UM"),
    ("MUR", "₨"),
    ("MVR", "Rf"),
    ("MWK", "MK"),
    ("MXN", "$"),
    ("MYR", "RM"),
    ("MZN", "MT"),
    ("NAD", "$"),
    ("NGN", "₦"),
    ("NIO", "C$"),
    ("NOK", "kr"),
    ("NPR", "₨"),
    ("NZD", "$"),
    ("OMR", "﷼"),
    ("PAB", "B/."),
    ("PEN", "S/."),
    ("PGK", "K"),
    ("PHP", "₱"),
    ("PKR", "₨"),
    ("PLN", "zł"),
    ("PYG", "Gs"),
    ("QAR", "﷼"),
    ("RON", "lei"),
    ("RSD", "Дин."),
    ("RUB", "₽"),
    ("RWF", "R₣"),
    ("SAR", "﷼"),
    ("SBD", "$"),
    ("SCR", "₨"),
    ("SDG", "ج.س."),
    ("SEK", "kr"),
    ("SGD", "$"),
    ("SHP", "£"),
    ("SLE", "Le"),
    ("SLL", "Le"),
    ("SOS", "S"),
    ("SRD", "$"),
    ("STD", "Db"),
    ("STN", "Db"),
    ("SVC", "$"),
    ("SYP", "£"),
    ("SZL", "E"),
    ("THB", "฿"),
    ("TJS", "SM"),
    ("TMT", "T"),
    ("TND", "د.ت"),
    ("TOP", "T$"),
    ("TRY", "₺"),
    ("TTD", "TT$"),
    ("TWD", "NT$"),
    ("TZS", "TSh"),
    ("UAH", "₴"),
    ("UGX", "USh"),
    ("USD", "$"),
    ("UYU", "$U"),
    ("UZS", "лв"),
    ("VEF", "Bs"),
    ("VES", "Bs.S"),
    ("VND", "₫"),
    ("VUV", "Vt"),
    ("WST", "WS$"),
    ("XAF", "FCFA"),
    ("XAG", "XAG"),
    ("XAU", "XAU"),
    ("XCD", "$"),
    ("XDR", "XDR"),
    ("XOF", "CFA"),
    ("XPF", "₣"),
    ("YER", "﷼"),
    ("ZAR", "R"),
    ("ZMK", "ZK"),
    ("ZMW", "ZK"),
    ("ZWL", "Z$"),
];

/// Errors loading a symbol override file.
#[derive(Debug, Error)]
pub enum SymbolError {
    /// File could not be read.
    #[error("failed to read symbol file {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// File is not a JSON object of strings.
    #[error("invalid symbol file {path}: {source}")]
    Parse {
        /// File path.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Maps currency codes to display symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, String>,
}

impl SymbolTable {
    /// Table with the built-in symbols only.
    #[must_use]
    pub fn builtin() -> Self {
        let symbols = BUILTIN_SYMBOLS
            .iter()
            .map(|(code, symbol)| ((*code).to_string(), (*symbol).to_string()))
            .collect();
        Self { symbols }
    }

    /// Adds or replaces symbols.
    #[must_use]
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (String, String)>) -> Self {
        self.symbols.extend(
            overrides
                .into_iter()
                .map(|(code, symbol)| (normalize_code(&code), symbol)),
        );
        self
    }

    /// Built-in table merged with a JSON override file (`{"EUR": "€"}`).
    pub fn load_with_overrides(path: &Path) -> Result<Self, SymbolError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| SymbolError::Io {
            path: display.clone(),
            source,
        })?;
        let overrides: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| SymbolError::Parse {
                path: display,
                source,
            })?;
        Ok(Self::builtin().with_overrides(overrides))
    }

    /// Symbol of `code`.
    pub fn symbol(&self, code: &str) -> Result<&str, ConversionError> {
        let code = normalize_code(code);
        self.symbols
            .get(&code)
            .map(String::as_str)
            .ok_or(ConversionError::UnknownCurrency(code))
    }

    /// Number of known symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if no symbol is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("USD", "$")]
    #[case("EUR", "€")]
    #[case("BAM", "KM")]
    #[case("VUV", "Vt")]
    #[case("gbp", "£")]
    fn test_builtin_symbols(#[case] code: &str, #[case] symbol: &str) {
        assert_eq!(SymbolTable::builtin().symbol(code), Ok(symbol));
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            SymbolTable::builtin().symbol("FFF"),
            Err(ConversionError::unknown_currency("FFF"))
        );
    }

    /// Every code exchangerate.host returns from `/list`.
    const LISTED_CODES: &str = "AED AFN ALL AMD ANG AOA ARS AUD AWG AZN BAM BBD BDT BGN BHD BIF \
        BMD BND BOB BRL BSD BTC BTN BWP BYN BYR BZD CAD CDF CHF CLF CLP CNY COP CRC CUC CUP CVE \
        CZK DJF DKK DOP DZD EGP ERN ETB EUR FJD FKP GBP GEL GGP GHS GIP GMD GNF GTQ GYD HKD HNL \
        HRK HTG HUF IDR ILS IMP INR IQD IRR ISK JEP JMD JOD JPY KES KGS KHR KMF KPW KRW KWD KYD \
        KZT LAK LBP LKR LRD LSL LTL LVL LYD MAD MDL MGA MKD MMK MNT MOP MRO MUR MVR MWK MXN MYR \
        MZN NAD NGN NIO NOK NPR NZD OMR PAB PEN PGK PHP PKR PLN PYG QAR RON RSD RUB RWF SAR SBD \
        SCR SDG SEK SGD SHP SLL SOS SRD STD SVC SYP SZL THB TJS TMT TND TOP TRY TTD TWD TZS UAH \
        UGX USD UYU UZS VEF VND VUV WST XAF XAG XAU XCD XDR XOF XPF YER ZAR ZMK ZMW ZWL";

    #[test]
    fn test_every_listed_code_has_a_symbol() {
        let symbols = SymbolTable::builtin();
        let missing: Vec<&str> = LISTED_CODES
            .split_whitespace()
            .filter(|code| symbols.symbol(code).is_err())
            .collect();
        assert!(missing.is_empty(), "codes without a symbol: {missing:?}");
    }

    #[rstest]
    #[case("VEF", "Bs")]
    #[case("XDR", "XDR")]
    #[case("CLF", "UF")]
    fn test_legacy_codes_have_symbols(#[case] code: &str, #[case] symbol: &str) {
        assert_eq!(SymbolTable::builtin().symbol(code), Ok(symbol));
    }

    #[test]
    fn test_builtin_has_no_duplicate_codes() {
        assert_eq!(SymbolTable::builtin().len(), BUILTIN_SYMBOLS.len());
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let table = SymbolTable::builtin().with_overrides([
            ("eur".to_string(), "&euro;".to_string()),
            ("FFF".to_string(), "F".to_string()),
        ]);
        assert_eq!(table.symbol("EUR"), Ok("&euro;"));
        assert_eq!(table.symbol("FFF"), Ok("F"));
        assert_eq!(table.symbol("USD"), Ok("$"));
    }

    #[test]
    fn test_load_with_overrides_from_file() {
        let path = std::env::temp_dir().join(format!("forex-symbols-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"CHF": "Fr."}"#).expect("write temp file");

        let table = SymbolTable::load_with_overrides(&path).expect("loads");
        assert_eq!(table.symbol("CHF"), Ok("Fr."));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_with_overrides_missing_file() {
        let result = SymbolTable::load_with_overrides(Path::new("/nonexistent/symbols.json"));
        assert!(matches!(result, Err(SymbolError::Io { .. })));
    }
}
