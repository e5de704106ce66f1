//! Derivation listing

/// Number each sentential form and prefix every rewrite with `=>`
pub fn format_derivation(steps: &[String]) -> String {
    let width = steps.len().saturating_sub(1).to_string().len();

    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let arrow = if index == 0 { "  " } else { "=>" };
            format!("{:>width$}  {} {}", index, arrow, step, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_steps() {
        let steps = vec![
            "<graph>".to_string(),
            "HI <draw> BYE".to_string(),
        ];

        assert_eq!(
            format_derivation(&steps),
            "0     <graph>\n1  => HI <draw> BYE"
        );
    }

    #[test]
    fn test_number_column_is_aligned() {
        let steps: Vec<String> = (0..12).map(|i| format!("step{}", i)).collect();
        let rendered = format_derivation(&steps);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], " 0     step0");
        assert_eq!(lines[11], "11  => step11");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_derivation(&[]), "");
    }
}
