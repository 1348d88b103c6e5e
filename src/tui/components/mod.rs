//! # TUI Components
//!
//! Stateless, props-based components. Each receives everything it draws as
//! struct fields and has no hidden dependency on `Session`:
//!
//! - `TitleBar`: one-line header with version and seed
//! - `PracticePanel`: the core view text inside a bordered block
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! └── practice_panel.rs  (Rendered session view)
//! ```

mod practice_panel;
mod title_bar;

pub use practice_panel::PracticePanel;
pub use title_bar::TitleBar;
