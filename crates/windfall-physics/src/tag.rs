//! Identity attached to every rigid body through its `user_data`.

use windfall_common::WindowId;

/// What a rigid body stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyTag {
    Window(WindowId),
    Boundary,
}

/// Window ids occupy the low 64 bits, so this value can never collide.
const BOUNDARY_USER_DATA: u128 = u128::MAX;

impl BodyTag {
    pub fn to_user_data(self) -> u128 {
        match self {
            BodyTag::Window(id) => u128::from(id.0 as u64),
            BodyTag::Boundary => BOUNDARY_USER_DATA,
        }
    }

    pub fn from_user_data(data: u128) -> Self {
        if data == BOUNDARY_USER_DATA {
            BodyTag::Boundary
        } else {
            BodyTag::Window(WindowId(data as u64 as i64))
        }
    }

    pub fn window(self) -> Option<WindowId> {
        match self {
            BodyTag::Window(id) => Some(id),
            BodyTag::Boundary => None,
        }
    }
}

impl std::fmt::Display for BodyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyTag::Window(id) => write!(f, "{id}"),
            BodyTag::Boundary => f.write_str("wall"),
        }
    }
}
