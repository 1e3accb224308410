//! One module per subcommand.

mod article;
mod clear;
mod diag;
mod lifecycle;
mod list;
mod prefs;
mod resolve;

pub use article::{run_article_add, run_article_set_field};
pub use clear::run_clear;
pub use diag::run_diag;
pub use lifecycle::{run_install, run_uninstall};
pub use list::run_list;
pub use prefs::{run_prefs_set, run_prefs_show};
pub use resolve::run_resolve;
