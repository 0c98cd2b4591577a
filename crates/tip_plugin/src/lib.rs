// crates/tip_plugin/src/lib.rs

//! Weapon tip bridge plugin.
//!
//! Exposes three script-callable functions that compute a weapon or shield
//! tip position on an actor's skeleton and fire a scripted spell cast at
//! that point. Stateless by design: every script call rebuilds what it needs
//! from live host state and leaves nothing behind but the cast itself.

pub mod bindings;
pub mod cast;
pub mod testing;
pub mod tip;

mod logging;

use std::sync::Arc;

use host_api::{GeometryProvider, PluginHost, HOST_API_VERSION};

/// Everything the registered bindings need between calls: the geometry
/// provider client, handed to us at load instead of fetched from globals.
pub struct PluginEnv {
    pub geometry: Arc<dyn GeometryProvider>,
}

/// Load entry point, invoked once by the host. Refuses to register anything
/// against a host whose API version we were not built for.
pub fn plugin_load(host: &mut PluginHost<'_>) -> bool {
    if host.api_version != HOST_API_VERSION {
        return false;
    }

    if logging::init_logging(host.log_dir.as_deref()) {
        tracing::info!("weapon tip bridge logging initialized");
    }

    let env = Arc::new(PluginEnv {
        geometry: Arc::clone(&host.geometry),
    });
    let registered = bindings::register_functions(host.vm, env);

    if registered {
        tracing::info!("weapon tip bridge loaded");
    }
    registered
}
