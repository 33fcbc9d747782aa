use regex::Regex;

/// Compares a rendered summary against known-good output and reports what
/// differs, station by station. Returns true when they match exactly.
pub fn check_correct(results: &str, correct: &str) -> bool {
    if results == correct {
        return true;
    }
    eprintln!("ERROR, output does not match expected!");

    let re = Regex::new(r"(?m)^([^=\n]+)=([^\n]+)$").unwrap();

    let results_groups: Vec<_> = re
        .captures_iter(results)
        .map(|c| (c.get(1).unwrap().as_str(), c.get(2).unwrap().as_str()))
        .collect();

    let correct_groups: Vec<_> = re
        .captures_iter(correct)
        .map(|c| (c.get(1).unwrap().as_str(), c.get(2).unwrap().as_str()))
        .collect();

    if results_groups.len() != correct_groups.len() {
        eprintln!(
            "Incorrect number of stations; expected {}, got {}!",
            correct_groups.len(),
            results_groups.len()
        );
        return false;
    }

    for i in 0..results_groups.len() {
        let (r_name, r_data) = results_groups[i];
        let (c_name, c_data) = correct_groups[i];

        if r_name != c_name {
            eprintln!("Station names do not match, expected {c_name}, got {r_name}!");
        } else if r_data != c_data {
            eprintln!(
                "Station data does not match for station {c_name}, expected {c_data}, got {r_data}!"
            );
        }
    }
    false
}
