//! # CLI Commands Module / Módulo de Comandos CLI
//!
//! One submodule per subcommand: `render` (HTML snapshot), `countdown`
//! (live console countdown), `rsvp` (interactive submission) and `init`
//! (content scaffolding wizard).

pub mod countdown;
pub mod init;
pub mod render;
pub mod rsvp;

use std::path::Path;

use crate::core::app::App;
use crate::core::content::ContentStore;
use crate::infra::prefs::FilePrefStore;

/// Starts a page from a local content file, resolving the locale from the
/// preference file and the system language, then applying an explicit
/// override when one was given (invalid overrides are a no-op).
pub(crate) fn start_app(content: &Path, prefs_path: &Path, locale_override: Option<&str>) -> App {
    let store = ContentStore::load_from_path(content);
    let prefs = Box::new(FilePrefStore::open(prefs_path));

    let mut app = App::start(store, prefs, sys_locale::get_locale().as_deref());
    if let Some(code) = locale_override {
        app.set_locale(code);
    }
    app
}
