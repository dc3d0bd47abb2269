use crossterm::style::Color;

// Catppuccin Mocha palette
pub const GREEN: Color = Color::Rgb {
    r: 166,
    g: 227,
    b: 161,
};
pub const RED: Color = Color::Rgb {
    r: 243,
    g: 139,
    b: 168,
};
pub const OVERLAY0: Color = Color::Rgb {
    r: 108,
    g: 112,
    b: 134,
};
pub const MAUVE: Color = Color::Rgb {
    r: 203,
    g: 166,
    b: 247,
};
