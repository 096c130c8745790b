/// Embed color for a competitive tier.
///
/// Tiers come in bands of three (Iron 1..3 = 3..5, and so on up to
/// Radiant = 27); everything below Iron 1, including negative input, renders
/// as unranked.
pub fn rank_color(tier: i64) -> u32 {
    match tier {
        t if t >= 27 => 0xFFFF85, // Radiant
        t if t >= 24 => 0xBB3D6B, // Immortal
        t if t >= 21 => 0x1EBC61, // Ascendant
        t if t >= 18 => 0xB489D5, // Diamond
        t if t >= 15 => 0x59A7B3, // Platinum
        t if t >= 12 => 0xF0B232, // Gold
        t if t >= 9 => 0xCCD1D1,  // Silver
        t if t >= 6 => 0xA87854,  // Bronze
        t if t >= 3 => 0x4D4D4D,  // Iron
        _ => 0x5865F2,            // Unranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(rank_color(27), 0xFFFF85);
        assert_eq!(rank_color(26), 0xBB3D6B);
        assert_eq!(rank_color(24), 0xBB3D6B);
        assert_eq!(rank_color(21), 0x1EBC61);
        assert_eq!(rank_color(18), 0xB489D5);
        assert_eq!(rank_color(15), 0x59A7B3);
        assert_eq!(rank_color(12), 0xF0B232);
        assert_eq!(rank_color(9), 0xCCD1D1);
        assert_eq!(rank_color(6), 0xA87854);
        assert_eq!(rank_color(3), 0x4D4D4D);
        assert_eq!(rank_color(2), 0x5865F2);
        assert_eq!(rank_color(0), 0x5865F2);
    }

    #[test]
    fn negative_tiers_render_as_unranked() {
        assert_eq!(rank_color(-1), 0x5865F2);
        assert_eq!(rank_color(i64::MIN), 0x5865F2);
    }

    #[test]
    fn every_tier_maps_and_bands_never_climb_as_tier_drops() {
        let order = [
            0xFFFF85u32, 0xBB3D6B, 0x1EBC61, 0xB489D5, 0x59A7B3, 0xF0B232, 0xCCD1D1, 0xA87854,
            0x4D4D4D, 0x5865F2,
        ];
        let band = |tier: i64| {
            order
                .iter()
                .position(|&c| c == rank_color(tier))
                .expect("tier must map to a known color")
        };
        for tier in 0..40 {
            assert!(band(tier) >= band(tier + 1));
        }
    }
}
