//! Key codes shared by bindings, input polling, and persistence.
//!
//! Discriminants follow the classic engine numbering so persisted integers
//! stay stable: `None` is 0, printable keys use their ASCII value, and the
//! three mouse buttons occupy 323..=325, disjoint from every keyboard code.

use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// A bindable key or mouse button.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    FromRepr,
)]
#[repr(i32)]
pub enum KeyCode {
    /// "No key bound" sentinel. Never reported as held.
    #[default]
    None = 0,
    Backspace = 8,
    Tab = 9,
    Return = 13,
    Escape = 27,
    Space = 32,
    Alpha0 = 48,
    Alpha1 = 49,
    Alpha2 = 50,
    Alpha3 = 51,
    Alpha4 = 52,
    Alpha5 = 53,
    Alpha6 = 54,
    Alpha7 = 55,
    Alpha8 = 56,
    Alpha9 = 57,
    A = 97,
    B = 98,
    C = 99,
    D = 100,
    E = 101,
    F = 102,
    G = 103,
    H = 104,
    I = 105,
    J = 106,
    K = 107,
    L = 108,
    M = 109,
    N = 110,
    O = 111,
    P = 112,
    Q = 113,
    R = 114,
    S = 115,
    T = 116,
    U = 117,
    V = 118,
    W = 119,
    X = 120,
    Y = 121,
    Z = 122,
    Delete = 127,
    UpArrow = 273,
    DownArrow = 274,
    RightArrow = 275,
    LeftArrow = 276,
    Insert = 277,
    Home = 278,
    End = 279,
    PageUp = 280,
    PageDown = 281,
    F1 = 282,
    F2 = 283,
    F3 = 284,
    F4 = 285,
    F5 = 286,
    F6 = 287,
    F7 = 288,
    F8 = 289,
    F9 = 290,
    F10 = 291,
    F11 = 292,
    F12 = 293,
    RightShift = 303,
    LeftShift = 304,
    RightControl = 305,
    LeftControl = 306,
    RightAlt = 307,
    LeftAlt = 308,
    MouseLeft = 323,
    MouseRight = 324,
    MouseMiddle = 325,
}

impl KeyCode {
    /// Raw integer form, as written to the preference store.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Convert a raw persisted integer back to a key code.
    ///
    /// Unknown values degrade to [`KeyCode::None`] instead of failing, so a
    /// corrupted or stale preference entry costs the binding, never the
    /// process.
    pub fn from_code(code: i32) -> Self {
        match Self::from_repr(code) {
            Some(key_code) => key_code,
            None => {
                log::warn!("unknown key code {code}, treating as unbound");
                KeyCode::None
            }
        }
    }

    /// True for the "no key bound" sentinel.
    pub fn is_none(self) -> bool {
        self == KeyCode::None
    }

    /// True for the synthetic mouse-button codes.
    pub fn is_mouse(self) -> bool {
        matches!(
            self,
            KeyCode::MouseLeft | KeyCode::MouseRight | KeyCode::MouseMiddle
        )
    }
}

/// Physical mouse buttons, mapped onto the synthetic key-code range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Synthetic key code for this button.
    pub fn key_code(self) -> KeyCode {
        match self {
            MouseButton::Left => KeyCode::MouseLeft,
            MouseButton::Right => KeyCode::MouseRight,
            MouseButton::Middle => KeyCode::MouseMiddle,
        }
    }
}
