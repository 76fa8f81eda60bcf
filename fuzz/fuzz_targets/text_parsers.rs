use honggfuzz::fuzz;
use zstd_devtools::{format_table, parse_byte_list, parse_table, FormatterConfig};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            if let Ok(rows) = parse_table(text) {
                let out = format_table(&rows, &FormatterConfig::default()).unwrap();
                assert_eq!(out.lines().count(), rows.len());
            }
            let _ = parse_byte_list(text);
        });
    }
}
