pub mod birth;
pub mod settings;
pub mod types;

pub use birth::{create_birth_chart, create_birth_chart_at};
pub use settings::ChartSettings;
pub use types::{BirthChart, BirthInfo, BirthRequest};
