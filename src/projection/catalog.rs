//! Adjustment ("fix") definitions

/// Named adjustment with a signed fractional effect (+0.05 = +5%)
pub(crate) struct Adjustment {
    pub(crate) id: &'static str,
    pub(crate) effect: f64,
}

impl Adjustment {
    /// Display label, e.g. "FIX 1"
    pub(crate) fn label(&self) -> String {
        self.id.to_uppercase()
    }
}

static ADJUSTMENTS: [Adjustment; 3] = [
    Adjustment {
        id: "fix 1",
        effect: 0.05,
    },
    Adjustment {
        id: "fix 2",
        effect: -0.03,
    },
    Adjustment {
        id: "fix 3",
        effect: 0.10,
    },
];

/// Get the adjustment catalog in display order
pub(crate) fn get_adjustments() -> &'static [Adjustment] {
    &ADJUSTMENTS
}

/// Resolve user input to a catalog id.
///
/// Accepts the id itself in any case ("fix 1", "FIX 1"), the id without
/// whitespace ("fix1") or the bare suffix ("1").
pub(crate) fn resolve_adjustment(
    catalog: &'static [Adjustment],
    token: &str,
) -> Option<&'static str> {
    let wanted = token.split_whitespace().collect::<String>().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    catalog.iter().map(|a| a.id).find(|id| {
        let compact: String = id.split_whitespace().collect();
        compact == wanted
            || id
                .split_whitespace()
                .last()
                .is_some_and(|suffix| suffix == wanted)
    })
}
