use crate::name::{hash_of, NameRef};
use crate::parse::parse_temp;
use crate::scan::find_char;
use crate::table::StationTable;

/// Runs the record loop over one line-aligned chunk: scan to ';', hash the
/// name in place, parse the temperature, upsert. The table is pre-sized, so
/// nothing in here allocates.
pub fn scan_chunk(chunk: &[u8], table: &mut StationTable) {
    let mut cursor = 0;
    while cursor < chunk.len() {
        let Some(sep) = find_char(chunk, cursor, b';') else {
            // a line-aligned chunk cannot end mid-record
            debug_assert!(false, "chunk tail without ';'");
            break;
        };
        let name = &chunk[cursor..sep];
        let hash = hash_of(name);
        let (temp, next) = parse_temp(chunk, sep + 1);
        table.add(NameRef::new(name), hash, temp);
        cursor = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &[u8]) -> StationTable {
        let mut table = StationTable::new();
        scan_chunk(input, &mut table);
        table
    }

    fn agg(table: &StationTable, name: &[u8]) -> (i16, i16, i64, i32) {
        let (_, a) = table
            .entries()
            .find(|(n, _)| *n == name)
            .expect("station missing");
        (a.min, a.max, a.sum, a.count)
    }

    #[test]
    fn aggregates_a_small_chunk() {
        let table = scan(b"Hamburg;12.0\nHamburg;13.0\nBulawayo;8.9\n");
        assert_eq!(table.len(), 2);
        assert_eq!(agg(&table, b"Hamburg"), (120, 130, 250, 2));
        assert_eq!(agg(&table, b"Bulawayo"), (89, 89, 89, 1));
    }

    #[test]
    fn single_record_chunk() {
        let table = scan(b"k;1.0\n");
        assert_eq!(table.len(), 1);
        assert_eq!(agg(&table, b"k"), (10, 10, 10, 1));
    }

    #[test]
    fn count_matches_newline_count() {
        let mut input = Vec::new();
        let mut newlines = 0i64;
        for i in 0..500 {
            input.extend_from_slice(format!("s{};{}.{}\n", i % 13, i % 30, i % 10).as_bytes());
            newlines += 1;
        }
        let table = scan(&input);
        let total: i64 = table.entries().map(|(_, a)| a.count as i64).sum();
        assert_eq!(total, newlines);
    }

    #[test]
    fn tolerates_trailing_record_metadata() {
        let table = scan(b"Oslo;1.2;extra stuff\nOslo;1.4\n");
        assert_eq!(agg(&table, b"Oslo"), (12, 14, 26, 2));
    }

    #[test]
    fn names_longer_than_one_vector_block() {
        let name = "a".repeat(40);
        let input = format!("{name};5.0\n{name};7.0\n");
        let table = scan(input.as_bytes());
        assert_eq!(table.len(), 1);
        assert_eq!(agg(&table, name.as_bytes()), (50, 70, 120, 2));
    }
}
