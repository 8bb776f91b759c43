// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the menu bar, toolbars and status bar.
//!
//! - **Spacing**: 4px-based spacing scale
//! - **Sizing**: fixed component heights
//! - **Typography**: font size scale
//! - **Border** / **Radius**: border widths and corner radii

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
}

pub mod sizing {
    /// Width of a dropdown menu.
    pub const MENU_WIDTH: f32 = 180.0;
}

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(typography::BODY > typography::CAPTION);
};
