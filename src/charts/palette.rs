use crate::models::stats::CategoryKey;

/// Ten-color categorical palette, reused cyclically past ten categories.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#bcbd22", // olive
    "#17becf", // cyan
];

/// Used when a key is unknown or the palette is empty.
pub const FALLBACK_COLOR: &str = "gray";

pub fn default_palette() -> Vec<String> {
    CATEGORY10.iter().map(|c| (*c).to_string()).collect()
}

/// Assigns palette colors to category keys by their position in the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalColorScale {
    domain: Vec<CategoryKey>,
    palette: Vec<String>,
}

impl OrdinalColorScale {
    /// Duplicate keys keep the color of their first occurrence.
    pub fn new(keys: impl IntoIterator<Item = CategoryKey>, palette: Vec<String>) -> Self {
        let mut domain: Vec<CategoryKey> = Vec::new();
        for key in keys {
            if !domain.contains(&key) {
                domain.push(key);
            }
        }
        Self { domain, palette }
    }

    pub fn color(&self, key: &CategoryKey) -> &str {
        if self.palette.is_empty() {
            return FALLBACK_COLOR;
        }
        self.domain
            .iter()
            .position(|k| k == key)
            .map_or(FALLBACK_COLOR, |i| &self.palette[i % self.palette.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let keys = (0..12).map(CategoryKey::Number);
        let scale = OrdinalColorScale::new(keys, default_palette());

        assert_eq!(scale.color(&CategoryKey::Number(0)), CATEGORY10[0]);
        assert_eq!(scale.color(&CategoryKey::Number(10)), CATEGORY10[0]);
        assert_eq!(scale.color(&CategoryKey::Number(11)), CATEGORY10[1]);
    }

    #[test]
    fn test_same_keys_same_colors() {
        let keys = vec![CategoryKey::from("A"), CategoryKey::from("Other")];
        let first = OrdinalColorScale::new(keys.clone(), default_palette());
        let second = OrdinalColorScale::new(keys, default_palette());

        assert_eq!(
            first.color(&CategoryKey::from("Other")),
            second.color(&CategoryKey::from("Other"))
        );
    }

    #[test]
    fn test_unknown_key_and_empty_palette() {
        let scale = OrdinalColorScale::new(vec![CategoryKey::Number(1)], Vec::new());
        assert_eq!(scale.color(&CategoryKey::Number(1)), FALLBACK_COLOR);

        let scale = OrdinalColorScale::new(vec![CategoryKey::Number(1)], default_palette());
        assert_eq!(scale.color(&CategoryKey::Number(7)), FALLBACK_COLOR);
    }
}
