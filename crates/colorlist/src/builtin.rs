//! Built-in color table.
//!
//! Names keep their source capitalization here; the registry lowercases
//! them on insert.

use crate::color::Color;

/// A `(name, color)` pair used for bulk loading.
pub type NamedColor = (&'static str, Color);

/// Built-in colors, in load order. When two names share a value the later
/// one wins the reverse lookup; see [`ALIASES`].
pub const BUILTIN_COLORS: &[NamedColor] = &[
    // HTML 4.01 basic colors
    ("Aqua", Color::rgb(0, 255, 255)),
    ("Blue", Color::rgb(0, 0, 255)),
    ("Black", Color::rgb(0, 0, 0)),
    ("Fuchsia", Color::rgb(255, 0, 255)),
    ("Lime", Color::rgb(0, 255, 0)),
    ("Yellow", Color::rgb(255, 255, 0)),
    ("Teal", Color::rgb(0, 128, 128)),
    ("Silver", Color::rgb(192, 192, 192)),
    ("Gray", Color::rgb(128, 128, 128)),
    ("Green", Color::rgb(0, 128, 0)),
    ("Navy", Color::rgb(0, 0, 128)),
    ("Maroon", Color::rgb(128, 0, 0)),
    ("Olive", Color::rgb(128, 128, 0)),
    ("Purple", Color::rgb(128, 0, 128)),
    ("Red", Color::rgb(255, 0, 0)),
    ("White", Color::rgb(255, 255, 255)),
    // SVG / CSS3 extended colors
    ("Aliceblue", Color::rgb(240, 248, 255)),
    ("Antiquewhite", Color::rgb(250, 235, 215)),
    ("Aquamarine", Color::rgb(127, 255, 212)),
    ("Azure", Color::rgb(240, 255, 255)),
    ("Beige", Color::rgb(245, 245, 220)),
    ("Bisque", Color::rgb(255, 228, 196)),
    ("Blanchedalmond", Color::rgb(255, 235, 205)),
    ("Blueviolet", Color::rgb(138, 43, 226)),
    ("Brown", Color::rgb(165, 42, 42)),
    ("Burlywood", Color::rgb(222, 184, 135)),
    ("Cadetblue", Color::rgb(95, 158, 160)),
    ("Chartreuse", Color::rgb(127, 255, 0)),
    ("Chocolate", Color::rgb(210, 105, 30)),
    ("Coral", Color::rgb(255, 127, 80)),
    ("Cornflowerblue", Color::rgb(100, 149, 237)),
    ("Cornsilk", Color::rgb(255, 248, 220)),
    ("Crimson", Color::rgb(220, 20, 60)),
    ("Cyan", Color::rgb(0, 255, 255)),
    ("Darkblue", Color::rgb(0, 0, 139)),
    ("Darkcyan", Color::rgb(0, 139, 139)),
    ("Darkgoldenrod", Color::rgb(184, 134, 11)),
    ("Darkgray", Color::rgb(169, 169, 169)),
    ("Darkgreen", Color::rgb(0, 100, 0)),
    ("Darkgrey", Color::rgb(169, 169, 169)),
    ("Darkkhaki", Color::rgb(189, 183, 107)),
    ("Darkmagenta", Color::rgb(139, 0, 139)),
    ("Darkolivegreen", Color::rgb(85, 107, 47)),
    ("Darkorange", Color::rgb(255, 140, 0)),
    ("Darkorchid", Color::rgb(153, 50, 204)),
    ("Darkred", Color::rgb(139, 0, 0)),
    ("Darksalmon", Color::rgb(233, 150, 122)),
    ("Darkseagreen", Color::rgb(143, 188, 143)),
    ("Darkslateblue", Color::rgb(72, 61, 139)),
    ("Darkslategray", Color::rgb(47, 79, 79)),
    ("Darkslategrey", Color::rgb(47, 79, 79)),
    ("Darkturquoise", Color::rgb(0, 206, 209)),
    ("Darkviolet", Color::rgb(148, 0, 211)),
    ("Deeppink", Color::rgb(255, 20, 147)),
    ("Deepskyblue", Color::rgb(0, 191, 255)),
    ("Dimgray", Color::rgb(105, 105, 105)),
    ("Dimgrey", Color::rgb(105, 105, 105)),
    ("Dodgerblue", Color::rgb(30, 144, 255)),
    ("Firebrick", Color::rgb(178, 34, 34)),
    ("Floralwhite", Color::rgb(255, 250, 240)),
    ("Forestgreen", Color::rgb(34, 139, 34)),
    ("Gainsboro", Color::rgb(220, 220, 220)),
    ("Ghostwhite", Color::rgb(248, 248, 255)),
    ("Gold", Color::rgb(255, 215, 0)),
    ("Goldenrod", Color::rgb(218, 165, 32)),
    ("Grey", Color::rgb(128, 128, 128)),
    ("Greenyellow", Color::rgb(173, 255, 47)),
    ("Honeydew", Color::rgb(240, 255, 240)),
    ("Hotpink", Color::rgb(255, 105, 180)),
    ("Indianred", Color::rgb(205, 92, 92)),
    ("Indigo", Color::rgb(75, 0, 130)),
    ("Ivory", Color::rgb(255, 255, 240)),
    ("Khaki", Color::rgb(240, 230, 140)),
    ("Lavender", Color::rgb(230, 230, 250)),
    ("Lavenderblush", Color::rgb(255, 240, 245)),
    ("Lawngreen", Color::rgb(124, 252, 0)),
    ("Lemonchiffon", Color::rgb(255, 250, 205)),
    ("Lightblue", Color::rgb(173, 216, 230)),
    ("Lightcoral", Color::rgb(240, 128, 128)),
    ("Lightcyan", Color::rgb(224, 255, 255)),
    ("Lightgoldenrodyellow", Color::rgb(250, 250, 210)),
    ("Lightgray", Color::rgb(211, 211, 211)),
    ("Lightgreen", Color::rgb(144, 238, 144)),
    ("Lightgrey", Color::rgb(211, 211, 211)),
    ("Lightpink", Color::rgb(255, 182, 193)),
    ("Lightsalmon", Color::rgb(255, 160, 122)),
    ("Lightseagreen", Color::rgb(32, 178, 170)),
    ("Lightskyblue", Color::rgb(135, 206, 250)),
    ("Lightslategray", Color::rgb(119, 136, 153)),
    ("Lightslategrey", Color::rgb(119, 136, 153)),
    ("Lightsteelblue", Color::rgb(176, 196, 222)),
    ("Lightyellow", Color::rgb(255, 255, 224)),
    ("Limegreen", Color::rgb(50, 205, 50)),
    ("Linen", Color::rgb(250, 240, 230)),
    ("Magenta", Color::rgb(255, 0, 255)),
    ("Mediumaquamarine", Color::rgb(102, 205, 170)),
    ("Mediumblue", Color::rgb(0, 0, 205)),
    ("Mediumorchid", Color::rgb(186, 85, 211)),
    ("Mediumpurple", Color::rgb(147, 112, 219)),
    ("Mediumseagreen", Color::rgb(60, 179, 113)),
    ("Mediumslateblue", Color::rgb(123, 104, 238)),
    ("Mediumspringgreen", Color::rgb(0, 250, 154)),
    ("Mediumturquoise", Color::rgb(72, 209, 204)),
    ("Mediumvioletred", Color::rgb(199, 21, 133)),
    ("Midnightblue", Color::rgb(25, 25, 112)),
    ("Mintcream", Color::rgb(245, 255, 250)),
    ("Mistyrose", Color::rgb(255, 228, 225)),
    ("Moccasin", Color::rgb(255, 228, 181)),
    ("Navajowhite", Color::rgb(255, 222, 173)),
    ("Oldlace", Color::rgb(253, 245, 230)),
    ("Olivedrab", Color::rgb(107, 142, 35)),
    ("Orange", Color::rgb(255, 165, 0)),
    ("Orangered", Color::rgb(255, 69, 0)),
    ("Orchid", Color::rgb(218, 112, 214)),
    ("Palegoldenrod", Color::rgb(238, 232, 170)),
    ("Palegreen", Color::rgb(152, 251, 152)),
    ("Paleturquoise", Color::rgb(175, 238, 238)),
    ("Palevioletred", Color::rgb(219, 112, 147)),
    ("Papayawhip", Color::rgb(255, 239, 213)),
    ("Peachpuff", Color::rgb(255, 218, 185)),
    ("Peru", Color::rgb(205, 133, 63)),
    ("Pink", Color::rgb(255, 192, 203)),
    ("Plum", Color::rgb(221, 160, 221)),
    ("Powderblue", Color::rgb(176, 224, 230)),
    ("Rosybrown", Color::rgb(188, 143, 143)),
    ("Royalblue", Color::rgb(65, 105, 225)),
    ("Saddlebrown", Color::rgb(139, 69, 19)),
    ("Salmon", Color::rgb(250, 128, 114)),
    ("Sandybrown", Color::rgb(244, 164, 96)),
    ("Seagreen", Color::rgb(46, 139, 87)),
    ("Seashell", Color::rgb(255, 245, 238)),
    ("Sienna", Color::rgb(160, 82, 45)),
    ("Skyblue", Color::rgb(135, 206, 235)),
    ("Slateblue", Color::rgb(106, 90, 205)),
    ("Slategray", Color::rgb(112, 128, 144)),
    ("Slategrey", Color::rgb(112, 128, 144)),
    ("Snow", Color::rgb(255, 250, 250)),
    ("Springgreen", Color::rgb(0, 255, 127)),
    ("Steelblue", Color::rgb(70, 130, 180)),
    ("Tan", Color::rgb(210, 180, 140)),
    ("Thistle", Color::rgb(216, 191, 216)),
    ("Tomato", Color::rgb(255, 99, 71)),
    ("Turquoise", Color::rgb(64, 224, 208)),
    ("Violet", Color::rgb(238, 130, 238)),
    ("Wheat", Color::rgb(245, 222, 179)),
    ("Whitesmoke", Color::rgb(245, 245, 245)),
    ("Yellowgreen", Color::rgb(154, 205, 50)),
    // extras
    ("Paleyellow", Color::rgb(255, 255, 224)),
];

/// Built-in names whose value is shared with a later entry, paired with
/// the name reverse lookup returns for that value.
pub const ALIASES: &[(&str, &str)] = &[
    ("aqua", "cyan"),
    ("fuchsia", "magenta"),
    ("gray", "grey"),
    ("darkgray", "darkgrey"),
    ("darkslategray", "darkslategrey"),
    ("dimgray", "dimgrey"),
    ("lightgray", "lightgrey"),
    ("lightslategray", "lightslategrey"),
    ("lightyellow", "paleyellow"),
    ("slategray", "slategrey"),
];

/// The name reverse lookup yields for `name`'s built-in value, if `name`
/// is a documented alias.
pub fn alias_target(name: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|&(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn table_names_are_unique_ignoring_case() {
        let mut seen = HashSet::new();
        for (name, _) in BUILTIN_COLORS {
            assert!(seen.insert(name.to_ascii_lowercase()), "duplicate {name}");
        }
        assert_eq!(seen.len(), 148);
    }

    #[test]
    fn aliases_match_table_order() {
        let mut last: HashMap<Color, String> = HashMap::new();
        for (name, color) in BUILTIN_COLORS {
            last.insert(*color, name.to_ascii_lowercase());
        }
        let mut shadowed: Vec<(String, String)> = BUILTIN_COLORS
            .iter()
            .map(|(name, color)| (name.to_ascii_lowercase(), last[color].clone()))
            .filter(|(name, winner)| name != winner)
            .collect();
        shadowed.sort();

        let mut documented: Vec<(String, String)> = ALIASES
            .iter()
            .map(|(a, b)| ((*a).to_string(), (*b).to_string()))
            .collect();
        documented.sort();
        assert_eq!(shadowed, documented);
    }

    #[test]
    fn alias_lookup_is_case_insensitive() {
        assert_eq!(alias_target("Cyan"), None);
        assert_eq!(alias_target("AQUA"), Some("cyan"));
        assert_eq!(alias_target("whitesmoke"), None);
    }

    #[test]
    fn all_builtins_are_opaque() {
        assert!(BUILTIN_COLORS.iter().all(|(_, c)| c.a == 255));
    }
}
