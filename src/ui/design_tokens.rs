// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation durations

## Examples

```
use snowletter::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent ink color
let faint_ink = Color {
    a: opacity::HINT,
    ..palette::INK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Night scene
    pub const NIGHT: Color = Color::from_rgb(0.043, 0.063, 0.149);
    pub const SNOW_WHITE: Color = Color::WHITE;

    // Envelope
    pub const LINING: Color = Color::from_rgb(0.29, 0.055, 0.055);
    pub const POCKET: Color = Color::from_rgb(0.91, 0.894, 0.851);
    pub const FLAP_BACK: Color = Color::from_rgb(0.941, 0.933, 0.902);

    // Wax seal (red scale)
    pub const SEAL_500: Color = Color::from_rgb(0.851, 0.11, 0.11);
    pub const SEAL_700: Color = Color::from_rgb(0.6, 0.106, 0.106);
    pub const SEAL_900: Color = Color::from_rgb(0.478, 0.043, 0.043);

    // Letter paper
    pub const PAPER: Color = Color::from_rgb(0.992, 0.984, 0.969);
    pub const INK: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const INK_FAINT: Color = Color::from_rgb(0.82, 0.835, 0.859);
    pub const HEADER_RED: Color = Color::from_rgb(0.498, 0.114, 0.114);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Faint decorative strokes (creases, peek text lines).
    pub const TRACE: f32 = 0.1;
    /// Decorative tints (letter footer strip, header rule).
    pub const TINT: f32 = 0.4;
    /// Preview content inside the envelope.
    pub const PREVIEW: f32 = 0.5;
    /// Hover hint label.
    pub const HINT: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Envelope body
    pub const ENVELOPE_WIDTH: f32 = 384.0;
    pub const ENVELOPE_HEIGHT: f32 = 256.0;

    // Letter surface
    pub const LETTER_MAX_WIDTH: f32 = 640.0;
    pub const LETTER_HEADER_HEIGHT: f32 = 64.0;
    pub const LETTER_FOOTER_HEIGHT: f32 = 32.0;

    // Wax seal
    pub const SEAL_RADIUS: f32 = 28.0;

    // Hover hint slot above the envelope
    pub const HINT_SLOT_HEIGHT: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Signature line.
    pub const TITLE_MD: f32 = 26.0;

    /// Letter body text.
    pub const BODY_LG: f32 = 17.0;

    /// Standard body - hint label.
    pub const BODY: f32 = 14.0;

    /// Caption - letter header.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Motion Scale
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Flap rotation from closed (0°) to open (180°).
    pub const FLAP_TURN: Duration = Duration::from_millis(700);

    /// Envelope drop/shrink/fade once opened.
    pub const ENVELOPE_RETIRE: Duration = Duration::from_millis(500);

    /// Inner letter panel rising out of the pocket.
    pub const LETTER_LIFT: Duration = Duration::from_millis(1000);

    /// Delay between opening and the letter text starting to appear.
    pub const REVEAL_DELAY: Duration = Duration::from_millis(500);

    /// Letter text fade/slide once revealed.
    pub const LETTER_FADE: Duration = Duration::from_millis(1000);

    /// Animation frame tick.
    pub const TICK: Duration = Duration::from_millis(16);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TRACE > 0.0 && opacity::TRACE < opacity::TINT);
    assert!(opacity::HINT > opacity::PREVIEW && opacity::HINT < 1.0);

    // Sizing validation
    assert!(sizing::ENVELOPE_WIDTH > sizing::ENVELOPE_HEIGHT);
    assert!(sizing::LETTER_MAX_WIDTH > sizing::ENVELOPE_WIDTH);
    assert!(sizing::SEAL_RADIUS * 2.0 < sizing::ENVELOPE_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Motion validation: the reveal delay must not outlast the flap turn,
    // or the text would start appearing while the flap is still closed.
    assert!(motion::REVEAL_DELAY.as_millis() <= motion::FLAP_TURN.as_millis());
    assert!(motion::TICK.as_millis() < motion::ENVELOPE_RETIRE.as_millis());

    // Color validation
    assert!(palette::SEAL_500.r >= 0.0 && palette::SEAL_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn motion_matches_the_card_choreography() {
        assert_eq!(motion::FLAP_TURN.as_millis(), 700);
        assert_eq!(motion::REVEAL_DELAY.as_millis(), 500);
    }
}
