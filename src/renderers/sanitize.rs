//! Character sanitation for plain pdflatex
//!
//! A fixed, ordered replacement table applied to every text block right
//! before it is written.

/// Problem sequences and their LaTeX equivalents, applied in order
pub const REPLACEMENTS: &[(&str, &str)] = &[
    (" &", " \\&"),
    ("^2", "\\textsuperscript{2}"),
    ("^m", "\\textsuperscript{m}"),
    ("\u{2003}", "~"),
    ("\u{202F}", "~"),
    ("\u{2212}", "-"),
    ("\u{001B}", ""),
    ("Γ", "\\ensuremath\\Gamma "),
    ("Δ", "\\ensuremath\\Delta "),
    ("Ω", "\\ensuremath\\Omega "),
    ("∑", "\\ensuremath\\Sigma "),
    ("∇", "\\ensuremath\\nabla "),
    ("√", "\\ensuremath\\sqrt"),
    ("⋆", "\\ensuremath\\ast "),
    ("β", "\\ensuremath\\beta "),
    ("ε", "\\ensuremath\\varepsilon "),
    ("θ", "\\ensuremath\\theta "),
    ("λ", "\\ensuremath\\lambda "),
    ("μ", "\\ensuremath\\mu "),
    ("ξ", "\\ensuremath\\xi "),
    ("π", "\\ensuremath\\pi "),
    ("σ", "\\ensuremath\\sigma "),
    ("φ", "\\ensuremath\\varphi "),
    ("ϕ", "\\ensuremath\\phi "),
    ("ψ", "\\ensuremath\\psi "),
    ("ω", "\\ensuremath\\omega "),
    ("∈", "\\ensuremath\\in "),
    ("∞", "\\ensuremath\\infty "),
    ("→", "\\ensuremath\\rightarrow "),
    ("≤", "\\ensuremath\\leq "),
    ("≥", "\\ensuremath\\geq "),
];

/// Apply the replacement table
pub fn sanitize(text: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ampersand_escaped() {
        let out = sanitize("Fluids & Structures & more");
        assert_eq!(out, "Fluids \\& Structures \\& more");
        assert!(!out.contains(" &"));
    }

    #[test]
    fn test_markup_separators_untouched() {
        let row = "\\white{A01}\n&\\footnotesize{x}\n&\\\\\\hline\n";
        assert_eq!(sanitize(row), row);
    }

    #[test]
    fn test_symbols_and_superscripts() {
        assert_eq!(sanitize("10^2 m^m"), "10\\textsuperscript{2} m\\textsuperscript{m}");
        assert_eq!(sanitize("λ→∞"), "\\ensuremath\\lambda \\ensuremath\\rightarrow \\ensuremath\\infty ");
        assert_eq!(sanitize("a\u{2212}b\u{202F}c"), "a-b~c");
    }

    #[test]
    fn test_sanitize_is_stable() {
        let once = sanitize("A & B with μ");
        assert_eq!(sanitize(&once), once);
    }
}
