//! A fixture of 47 points scattered around south-east England, with known
//! query answers from the center below.

/// Query center: (latitude, longitude).
pub(crate) const CENTER: (f64, f64) = (51.5286416, 0.0);

/// Fixture points as (latitude, longitude); a point's position in this list
/// is its id. The trailing comment is the great-circle distance from
/// [`CENTER`].
pub(crate) fn points() -> Vec<(f64, f64)> {
    vec![
        (51.756803, 0.478368),   // 0: 41632 m
        (52.179074, 0.053014),   // 1: 72416 m
        (50.125663, -0.292289),  // 2: 157349 m
        (50.383015, -0.643715),  // 3: 135130 m
        (51.772619, -0.207499),  // 4: 30674 m
        (52.059052, -2.633779),  // 5: 190481 m
        (53.580947, 1.26308),    // 6: 243649 m
        (50.289512, -1.32789),   // 7: 166286 m
        (49.212219, -0.079962),  // 8: 257637 m
        (51.319779, 0.18311),    // 9: 26468 m
        (52.033795, 0.452472),   // 10: 64218 m
        (52.587786, 1.449123),   // 11: 153897 m
        (51.62671, -0.531139),   // 12: 38289 m
        (50.730614, 0.459604),   // 13: 94354 m
        (50.653652, 0.050177),   // 14: 97358 m
        (50.297906, 2.039702),   // 15: 197918 m
        (51.085196, -0.404841),  // 16: 56774 m
        (51.428702, -0.618777),  // 17: 44269 m
        (52.061673, -1.957203),  // 18: 147065 m
        (51.139729, -0.809813),  // 19: 70959 m
        (50.074763, -0.342907),  // 20: 163450 m
        (51.367143, -1.393686),  // 21: 98236 m
        (52.399226, -1.305303),  // 22: 131787 m
        (50.934634, 0.935637),   // 23: 92771 m
        (51.824429, -3.135553),  // 24: 218672 m
        (51.739426, -1.260129),  // 25: 90072 m
        (50.978499, -0.597166),  // 26: 73954 m
        (49.423581, 1.539471),   // 27: 258167 m
        (52.919648, -0.192458),  // 28: 155227 m
        (51.919277, -1.152228),  // 29: 90473 m
        (50.789444, -1.356436),  // 30: 125312 m
        (51.312623, -0.244752),  // 31: 29411 m
        (53.474565, -1.290028),  // 32: 233322 m
        (49.954933, 1.874005),   // 33: 219095 m
        (49.506604, -1.360132),  // 34: 244531 m
        (50.734972, -1.220699),  // 35: 122650 m
        (52.14019, -0.239677),   // 36: 69967 m
        (51.760698, -2.320694),  // 37: 162188 m
        (51.957231, -0.012359),  // 38: 47665 m
        (50.575882, 0.541004),   // 39: 112488 m
        (51.80764, 0.544332),    // 40: 48700 m
        (51.611621, 1.152374),   // 41: 80177 m
        (52.424516, 3.383153),   // 42: 252199 m
        (50.413189, 1.041359),   // 43: 143875 m
        (51.793552, 1.201706),   // 44: 87966 m
        (51.318961, -0.790041),  // 45: 59534 m
        (51.890303, 0.30703),    // 46: 45440 m
    ]
}

/// Ids of the 24 points within 100 km of [`CENTER`].
pub(crate) fn ids_within_100_km() -> Vec<usize> {
    vec![
        0, 1, 4, 9, 10, 12, 13, 14, 16, 17, 19, 21, 23, 25, 26, 29, 31, 36, 38, 40, 41, 44, 45, 46,
    ]
}

/// Ids of the ten points nearest [`CENTER`], ascending by distance.
pub(crate) fn nearest_10_ids() -> Vec<usize> {
    vec![9, 31, 4, 12, 0, 17, 46, 38, 40, 16]
}
