use akshara::{segment, Record};

#[cfg(test)]
mod tests {
    use super::*;

    mod segment {
        use super::*;

        #[test]
        fn document_with_header_and_continuation() {
            let raw = "Øekad\to\"kZ\tfooj.k\n\
                       1.\tƒ‹†‡\tHkkjr LorU= gqvk\n\
                       2.\tƒ‹‡å\tx.kra= fnol\n\
                       turk dks lefiZr\n";
            let records = segment(raw);
            assert_eq!(
                records,
                vec![
                    Record {
                        serial: 1,
                        year: "१९४५".to_string(),
                        description: "भारत स्वतन्त्र हुआ".to_string(),
                    },
                    Record {
                        serial: 2,
                        year: "१९५०".to_string(),
                        description: "गणतंत्र दिवस जनता को समर्पित".to_string(),
                    },
                ]
            );
        }

        #[test]
        fn multi_space_and_tab_separators_mix() {
            let raw = "7.  ƒ‹†‡   Hkkjr\n8.\tƒ‹‡å\tfnol";
            let records = segment(raw);
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].serial, 7);
            assert_eq!(records[0].year, "१९४५");
            assert_eq!(records[0].description, "भारत");
            assert_eq!(records[1].serial, 8);
            assert_eq!(records[1].year, "१९५०");
            assert_eq!(records[1].description, "दिवस");
        }

        #[test]
        fn year_only_start_line_takes_description_from_continuations() {
            let raw = "4.\tƒ‹‡å\nx.kra= fnol";
            let records = segment(raw);
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].year, "१९५०");
            assert_eq!(records[0].description, "गणतंत्र दिवस");
        }

        #[test]
        fn blank_lines_are_ignored() {
            let raw = "1.\tƒ‹†‡\tHkkjr\n\n\n2.\tƒ‹‡å\tfnol";
            let records = segment(raw);
            assert_eq!(records.len(), 2);
        }
    }
}
