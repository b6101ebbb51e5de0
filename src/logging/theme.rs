use crossterm::style::Color;
use log::Level;

pub struct Theme {
    pub error: Color,   // Red
    pub warn: Color,    // Orange
    pub info: Color,    // Green
    pub debug: Color,   // Blue
    pub trace: Color,   // Grey
    pub message: Color, // Plain foreground
}

impl Theme {
    pub fn level(&self, level: Level) -> Color {
        match level {
            Level::Error => self.error,
            Level::Warn => self.warn,
            Level::Info => self.info,
            Level::Debug => self.debug,
            Level::Trace => self.trace,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
    warn: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    },
    info: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    },
    debug: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    trace: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
    message: Color::Rgb {
        r: 205,
        g: 214,
        b: 244,
    },
};
