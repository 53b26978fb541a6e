use crate::mappings::{DriveLetter, MappingProperties};

/// Display the mapping table to stdout.
pub fn display_mapping_table(rows: &[(DriveLetter, MappingProperties)], detailed: bool) {
    if rows.is_empty() {
        println!("No drive mappings configured");
        return;
    }

    if detailed {
        println!("{:<7} {:<28} {:<20}", "Drive", "Device", "Serial");
        println!("{:-<56}", "");
        for (letter, props) in rows {
            println!(
                "{:<7} {:<28} {:<20}",
                format!("{}:", letter),
                props.device_name,
                props.serial_number
            );
        }
    } else {
        println!("Mapped drives: {}", summarize_letters(rows));
    }

    println!(
        "{} mapping{} configured",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    );
}

/// Display one mapping's properties.
pub fn display_mapping(letter: DriveLetter, props: &MappingProperties) {
    println!("Mapping for drive {}:", letter);
    println!("  Device: {}", props.device_name);
    println!("  Serial: {}", props.serial_number);
}

/// Comma-separated drive letters, in range order.
fn summarize_letters(rows: &[(DriveLetter, MappingProperties)]) -> String {
    rows.iter()
        .map(|(letter, _)| letter.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(device: &str, serial: &str) -> MappingProperties {
        MappingProperties {
            device_name: device.to_string(),
            serial_number: serial.to_string(),
        }
    }

    #[test]
    fn summarizes_letters_in_order() {
        let rows = vec![
            (DriveLetter::new('C').unwrap(), props(r"\\.\Tape0", "A")),
            (DriveLetter::new('E').unwrap(), props(r"\\.\Tape1", "B")),
            (DriveLetter::new('Z').unwrap(), props(r"\\.\Tape2", "C")),
        ];
        assert_eq!(summarize_letters(&rows), "C, E, Z");
    }

    #[test]
    fn summarizes_single_letter_without_separator() {
        let rows = vec![(DriveLetter::new('E').unwrap(), props(r"\\.\Tape0", "A"))];
        assert_eq!(summarize_letters(&rows), "E");
    }
}
