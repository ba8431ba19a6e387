use akshara::convert;

fn assert_converts(legacy: &str, expected: &str) {
    assert_eq!(convert(legacy), expected, "converting {:?}", legacy);
}

#[cfg(test)]
mod tests {
    use super::*;

    mod contract {
        use super::*;

        #[test]
        fn empty_input() {
            assert_converts("", "");
        }

        #[test]
        fn devanagari_is_unchanged() {
            assert_converts("भारत एक महान देश है", "भारत एक महान देश है");
            assert_converts("कार्यालय", "कार्यालय");
            assert_converts("शक्ति", "शक्ति");
        }

        #[test]
        fn unmapped_characters_pass_through() {
            assert_converts("2014", "2014");
            assert_converts("fnol 2014", "दिवस 2014");
        }
    }

    mod short_i {
        use super::*;

        #[test]
        fn marker_before_consonant() {
            assert_converts("fd", "कि");
        }

        #[test]
        fn word_with_anusvara_after_consonant() {
            assert_converts("fganh", "हिंदी");
        }

        #[test]
        fn compound_marker_claims_the_anusvara() {
            let converted = convert("Çg");
            assert_eq!(converted, "हिं");
            assert_eq!(converted.chars().count(), 3);
        }

        #[test]
        fn half_consonant_fix_up() {
            assert_converts("'kfDr", "शक्ति");
        }
    }

    mod reph {
        use super::*;

        #[test]
        fn scan_skips_a_vowel_sign_run() {
            assert_converts("साेZ", "र्सो");
        }

        #[test]
        fn underflow_prefixes_at_start() {
            assert_converts("\u{093E}Z", "र्\u{093E}");
        }

        #[test]
        fn combined_reph_anusvara_glyph() {
            assert_converts(")±", "र्द्धं");
            assert_converts("b±", "ईं");
        }
    }

    mod matra_collapse {
        use super::*;

        #[test]
        fn aa_e_becomes_o() {
            assert_converts("काे", "को");
        }

        #[test]
        fn aa_ai_becomes_au() {
            assert_converts("काै", "कौ");
        }
    }

    mod corpus {
        use super::*;

        #[test]
        fn words() {
            assert_converts("Hkkjr", "भारत");
            assert_converts("dk;kZy;", "कार्यालय");
            assert_converts("dhfrZeku", "कीर्तिमान");
            assert_converts("NksM+ks", "छोड़ो");
            assert_converts("vkanksyu", "आंदोलन");
            assert_converts("x.kra=", "गणतंत्र");
            assert_converts("ƒ‹†‡", "१९४५");
        }

        #[test]
        fn phrases() {
            assert_converts("Hkkjr ,d egku ns'k gS", "भारत एक महान देश है");
            assert_converts("turk dks lefiZr", "जनता को समर्पित");
            assert_converts("fganh Hkk\"kk", "हिंदी भाषा");
        }
    }
}
