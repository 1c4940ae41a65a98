mod post_wizard;

pub use post_wizard::run_post_wizard;
