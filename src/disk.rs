use clap::ValueEnum;
use serde::Serialize;

/// Archive disk sizes offered by the hardware line, in terabytes.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum DiskSize {
	#[value(name = "4")]
	Tb4,
	#[value(name = "6")]
	Tb6,
	#[value(name = "8")]
	Tb8,
	#[value(name = "10")]
	Tb10,
	#[value(name = "12")]
	Tb12,
	#[value(name = "14")]
	Tb14,
	#[value(name = "16")]
	Tb16,
	#[value(name = "18")]
	Tb18,
	#[value(name = "20")]
	Tb20,
	#[value(name = "22")]
	Tb22,
}

impl DiskSize {
	/// The size of a single disk in terabytes
	pub(crate) fn tb(&self) -> f64 {
		match self {
			Self::Tb4 => 4.0,
			Self::Tb6 => 6.0,
			Self::Tb8 => 8.0,
			Self::Tb10 => 10.0,
			Self::Tb12 => 12.0,
			Self::Tb14 => 14.0,
			Self::Tb16 => 16.0,
			Self::Tb18 => 18.0,
			Self::Tb20 => 20.0,
			Self::Tb22 => 22.0,
		}
	}
}
