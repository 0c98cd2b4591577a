// crates/host_api/src/plugin.rs

//! Plugin load interface.
//!
//! Instead of global engine singletons, the host hands the plugin one
//! environment handle at load time bundling everything it may consume: the
//! script VM to register against, the collision-geometry provider client,
//! and the directory for the plugin's log file.

use std::path::PathBuf;
use std::sync::Arc;

use crate::geometry::GeometryProvider;
use crate::script::ScriptVm;

/// Bumped whenever the shapes in this crate change incompatibly. Plugins
/// check it in their load entry and refuse to register on a mismatch.
pub const HOST_API_VERSION: u32 = 1;

pub struct PluginHost<'a> {
    pub api_version: u32,
    pub vm: &'a mut dyn ScriptVm,
    pub geometry: Arc<dyn GeometryProvider>,
    /// Where the plugin may create its log file. `None` disables file
    /// logging without failing the load.
    pub log_dir: Option<PathBuf>,
}

impl<'a> PluginHost<'a> {
    pub fn new(vm: &'a mut dyn ScriptVm, geometry: Arc<dyn GeometryProvider>) -> Self {
        Self {
            api_version: HOST_API_VERSION,
            vm,
            geometry,
            log_dir: None,
        }
    }

    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = Some(dir);
        self
    }
}

/// Signature of a plugin's load entry: invoked once, returns load success.
pub type PluginInit = fn(&mut PluginHost<'_>) -> bool;
