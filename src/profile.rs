use clap::ValueEnum;
use serde::Serialize;

/// Recording profiles from the vendor retention table. Each profile fixes a
/// stream bitrate and a retention period, which together determine the
/// archive capacity required per camera.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum CameraProfile {
	/// Fixed installation, type 1/2/9, 4096 kbit/s, 30 days
	FixedHigh,
	/// Fixed installation, type 3/4, 2048 kbit/s, 30 days
	FixedStandard,
	/// Mobile kit, 2048 kbit/s, 30 days
	MobileKit,
	/// Residential, type 1/2/9, 4096 kbit/s, 30 days
	ResidentialHigh,
	/// Residential, type 3/4, 2048 kbit/s, 10 days
	ResidentialStandard,
	/// Residential, type 3/5 with metadata, 2048 kbit/s, 10 days
	ResidentialMetadata,
}

impl CameraProfile {
	/// Required archive capacity per camera, in terabytes
	pub(crate) fn per_camera_tb(&self) -> f64 {
		match self {
			Self::FixedHigh => 1.4,
			Self::FixedStandard => 0.7,
			Self::MobileKit => 0.7,
			Self::ResidentialHigh => 1.4,
			Self::ResidentialStandard => 0.3,
			Self::ResidentialMetadata => 0.5,
		}
	}

	/// Human-readable profile description for reports
	pub(crate) fn description(&self) -> &'static str {
		match self {
			Self::FixedHigh => "Fixed type 1/2/9 - 4096 kbit/s, 30 days",
			Self::FixedStandard => "Fixed type 3/4 - 2048 kbit/s, 30 days",
			Self::MobileKit => "Mobile kit - 2048 kbit/s, 30 days",
			Self::ResidentialHigh => "Residential type 1/2/9 - 4096 kbit/s, 30 days",
			Self::ResidentialStandard => "Residential type 3/4 - 2048 kbit/s, 10 days",
			Self::ResidentialMetadata => "Residential type 3/5 with metadata - 2048 kbit/s, 10 days",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::CameraProfile;

	#[test]
	fn per_camera_capacities_are_positive() {
		for profile in [
			CameraProfile::FixedHigh,
			CameraProfile::FixedStandard,
			CameraProfile::MobileKit,
			CameraProfile::ResidentialHigh,
			CameraProfile::ResidentialStandard,
			CameraProfile::ResidentialMetadata,
		] {
			assert!(profile.per_camera_tb() > 0.0);
		}
	}

	#[test]
	fn high_bitrate_profiles_need_double_capacity() {
		assert_eq!(CameraProfile::FixedHigh.per_camera_tb(), 2.0 * CameraProfile::FixedStandard.per_camera_tb());
	}
}
