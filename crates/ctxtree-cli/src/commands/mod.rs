mod show;

pub use show::show_context;
