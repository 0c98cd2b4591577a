// crates/host_api/src/script.rs

//! Script-callable function surface.
//!
//! The scripting VM is host-owned; plugins only get to register named native
//! functions against it. A native function receives the world and the raw
//! script arguments and returns nothing: failures on this boundary are
//! silent by contract, since the calling script has no error channel.

use std::collections::HashMap;

use crate::world::{ActorHandle, FormId, GameWorld, SpellId};

/// Arguments as the VM hands them over. Script-side null references arrive
/// as `None`; native functions must treat any missing argument as a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptArgs {
    pub actor: Option<ActorHandle>,
    pub spell: Option<SpellId>,
    pub marker_base: Option<FormId>,
    pub snap_to_ground: bool,
}

pub type NativeFn = Box<dyn Fn(&mut GameWorld, &ScriptArgs)>;

pub trait ScriptVm {
    /// Registers `func` under (class, name). Re-registering replaces the
    /// previous binding.
    fn register_function(&mut self, class: &str, name: &str, func: NativeFn);
}

/// Reference VM used by the host harness and tests: a flat
/// (class, name) -> function table.
#[derive(Default)]
pub struct FunctionRegistry {
    funcs: HashMap<(String, String), NativeFn>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes a registered function. Returns false if nothing is bound
    /// under (class, name); the world is untouched in that case.
    pub fn call(&self, class: &str, name: &str, world: &mut GameWorld, args: &ScriptArgs) -> bool {
        match self.funcs.get(&(class.to_string(), name.to_string())) {
            Some(func) => {
                func(world, args);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl ScriptVm for FunctionRegistry {
    fn register_function(&mut self, class: &str, name: &str, func: NativeFn) {
        self.funcs.insert((class.to_string(), name.to_string()), func);
    }
}
