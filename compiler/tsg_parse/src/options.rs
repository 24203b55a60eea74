//! Parser configuration.

use tsg_ir::ast::{Goal, SourceKind};

/// Which of the four parse targets to use, plus the few grammar choices
/// that are left to the caller.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseOptions {
    pub source_kind: SourceKind,
    pub goal: Goal,
    /// Maximum nesting of recursive productions before the parser gives up
    /// on the statement with a depth-exceeded error.
    pub max_depth: u32,
    /// Accept a trailing comma in argument, parameter, type-parameter,
    /// type-argument, tuple and import/export lists.
    pub trailing_commas: bool,
    /// Every type reference must carry a type-argument list.
    pub require_type_arguments: bool,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: u32 = 2048;

    pub const fn new() -> Self {
        ParseOptions {
            source_kind: SourceKind::Implementation,
            goal: Goal::Script,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            trailing_commas: true,
            require_type_arguments: false,
        }
    }

    /// Implementation source with the module goal.
    pub const fn module() -> Self {
        Self::new().with_goal(Goal::Module)
    }

    /// Declaration source with the module goal.
    pub const fn declaration() -> Self {
        Self::module().with_source_kind(SourceKind::Declaration)
    }

    #[must_use]
    pub const fn with_source_kind(mut self, source_kind: SourceKind) -> Self {
        self.source_kind = source_kind;
        self
    }

    #[must_use]
    pub const fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_trailing_commas(mut self, allowed: bool) -> Self {
        self.trailing_commas = allowed;
        self
    }

    #[must_use]
    pub const fn with_required_type_arguments(mut self, required: bool) -> Self {
        self.require_type_arguments = required;
        self
    }

    #[inline]
    pub const fn is_declaration(&self) -> bool {
        matches!(self.source_kind, SourceKind::Declaration)
    }

    #[inline]
    pub const fn is_module(&self) -> bool {
        matches!(self.goal, Goal::Module)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
