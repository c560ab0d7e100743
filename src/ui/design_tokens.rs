// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the card's design tokens.

## Organization

- **Palette**: Base colors (dark surfaces, gold accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use membership_card::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let faded_gold = Color {
    a: opacity::MUTED,
    ..palette::GOLD
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Screen background (#0a0a0a).
    pub const GRAY_950: Color = Color::from_rgb(0.039, 0.039, 0.039);
    /// Card surface (#1a1a1a).
    pub const GRAY_900: Color = Color::from_rgb(0.102, 0.102, 0.102);
    /// Raised card surface (#2a2a2a).
    pub const GRAY_800: Color = Color::from_rgb(0.165, 0.165, 0.165);
    /// Separators and avatar fill (#333333).
    pub const GRAY_700: Color = Color::from_rgb(0.2, 0.2, 0.2);
    /// Secondary text (#888888).
    pub const GRAY_400: Color = Color::from_rgb(0.533, 0.533, 0.533);

    // Accent colors
    /// Gold accent (#FFD700).
    pub const GOLD: Color = Color::from_rgb(1.0, 0.843, 0.0);
    /// Amber end of the button gradient (#FFA500).
    pub const AMBER: Color = Color::from_rgb(1.0, 0.647, 0.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.3;
    pub const MUTED: f32 = 0.6;
    pub const PRESSED: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 40.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const CARD_WIDTH: f32 = 380.0;
    pub const LOGO: f32 = 40.0;
    pub const AVATAR: f32 = 60.0;
    /// Side of a single QR module, in logical pixels.
    pub const QR_CELL: f32 = 4.0;
    pub const CHIP_WIDTH: f32 = 30.0;
    pub const CHIP_HEIGHT: f32 = 20.0;
    pub const CHIP_CORE_WIDTH: f32 = 16.0;
    pub const CHIP_CORE_HEIGHT: f32 = 12.0;
    /// Refresh button at natural scale.
    pub const BUTTON_WIDTH: f32 = 304.0;
    pub const BUTTON_HEIGHT: f32 = 52.0;
    pub const INFO_MAX_WIDTH: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes, from page title down to card fine print.

    /// Screen title
    pub const TITLE_LG: f32 = 28.0;

    /// Member name
    pub const TITLE_MD: f32 = 22.0;

    /// Logo mark and avatar initials
    pub const TITLE_SM: f32 = 20.0;

    /// Subtitle and button label
    pub const BODY_LG: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Card caption, id line, footer
    pub const CAPTION: f32 = 12.0;

    /// Code hint
    pub const CAPTION_SM: f32 = 11.0;

    /// Tier badge
    pub const BADGE: f32 = 10.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const XS: f32 = 2.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 20.0;
    pub const PILL: f32 = 25.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Gold glow under the card.
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::GOLD
        },
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 20.0,
    };

    /// Gold glow under the refresh button.
    pub const BUTTON: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::GOLD
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Drop shadow of the code plate.
    pub const PLATE: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::BUTTON_WIDTH < sizing::CARD_WIDTH);
    assert!(sizing::CHIP_CORE_WIDTH < sizing::CHIP_WIDTH);
    assert!(sizing::CHIP_CORE_HEIGHT < sizing::CHIP_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::CAPTION > typography::BADGE);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_is_lighter_than_amber() {
        assert!(palette::GOLD.g > palette::AMBER.g);
        assert_eq!(palette::GOLD.r, palette::AMBER.r);
    }

    #[test]
    fn surfaces_get_lighter_as_they_rise() {
        assert!(palette::GRAY_950.r < palette::GRAY_900.r);
        assert!(palette::GRAY_900.r < palette::GRAY_800.r);
        assert!(palette::GRAY_800.r < palette::GRAY_700.r);
    }
}
