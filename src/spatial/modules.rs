//! Module definitions, directions, and the immutable registry

use crate::io::error::{GenerationError, Result};

/// Connector code attached to one side of a module
///
/// Codes are opaque: two sockets are compatible exactly when their codes are
/// equal, and no other ordering or arithmetic meaning applies.
pub type SocketCode = u32;

/// The four orthogonal directions, indexed clockwise from up
///
/// The index doubles as the position of the matching socket in a module's
/// socket signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the previous row
    Up,
    /// Toward the next column
    Right,
    /// Toward the next row
    Down,
    /// Toward the previous column
    Left,
}

impl Direction {
    /// All directions in socket-signature order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Socket index for this direction
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Direction a neighbor uses to face back toward this cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Row and column deltas for stepping one cell in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }
}

/// A tile type with an identity and a 4-direction socket signature
///
/// Modules are immutable once loaded and owned by the registry; the solver
/// refers to them by registry index only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    identity: String,
    sockets: [SocketCode; 4],
}

impl Module {
    /// Create a module from an identity and a complete socket signature
    pub const fn new(identity: String, sockets: [SocketCode; 4]) -> Self {
        Self { identity, sockets }
    }

    /// Identity used for result output and equality
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Socket code facing the given direction
    pub const fn socket(&self, direction: Direction) -> SocketCode {
        let [up, right, down, left] = self.sockets;
        match direction {
            Direction::Up => up,
            Direction::Right => right,
            Direction::Down => down,
            Direction::Left => left,
        }
    }
}

/// Raw module definition as supplied by a collaborator, before validation
#[derive(Clone, Debug)]
pub struct ModuleDefinition {
    /// Identity carried through to the generated output
    pub identity: String,
    /// Socket codes in up/right/down/left order; must contain exactly 4
    pub sockets: Vec<SocketCode>,
}

/// Immutable catalog of modules in a stable load order
///
/// The load order drives deterministic domain initialization and the
/// row-major selection scan, so it is preserved exactly as supplied.
#[derive(Clone, Debug)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
}

impl ModuleRegistry {
    /// Validate definitions and build the registry
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The definition list is empty (nothing could ever be placed)
    /// - Any definition does not carry exactly 4 socket codes
    pub fn load(definitions: Vec<ModuleDefinition>) -> Result<Self> {
        if definitions.is_empty() {
            return Err(GenerationError::EmptyCatalog);
        }

        let mut modules = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let socket_count = definition.sockets.len();
            let sockets = <[SocketCode; 4]>::try_from(definition.sockets.as_slice()).map_err(
                |_| GenerationError::InvalidModuleDefinition {
                    identity: definition.identity.clone(),
                    socket_count,
                },
            )?;
            modules.push(Module::new(definition.identity, sockets));
        }

        Ok(Self { modules })
    }

    /// All modules in load order
    pub fn all(&self) -> &[Module] {
        &self.modules
    }

    /// Module at the given registry index
    pub fn get(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    /// Number of modules in the catalog
    pub const fn len(&self) -> usize {
        self.modules.len()
    }

    /// Test whether the catalog holds no modules
    ///
    /// Always false for a loaded registry; present for API completeness.
    pub const fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
