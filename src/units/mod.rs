//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod density;
pub mod flow;
pub mod pressure;
pub mod viscosity;

pub use area::{convert_area, AreaUnit};
pub use density::{convert_mud_density, MudDensityUnit};
pub use flow::{convert_flow_rate, FlowRateUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
