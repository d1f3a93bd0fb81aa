use serde::Serialize;

/// One camera-count bracket and the server hardware class recommended for it.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct HardwareTier {
	/// Inclusive camera-count range covered by this tier
	pub(crate) camera_range: (u32, u32),
	/// CPU requirement for this tier
	pub(crate) cpu_descriptor: &'static str,
	/// Minimum physical core count, kept verbatim from the vendor table ("2-4", "4", ...)
	pub(crate) core_count: &'static str,
	/// Recommended RAM size in gigabytes
	pub(crate) ram_gb: u32,
}

const CORE_I5: &str = "Intel Core i5 Gen8 (2.1 GHz or better)";
const XEON_E5: &str = "Intel Xeon E5 (2.1 GHz or better)";

/// The vendor hardware table, ordered by camera range. Loaded once, never mutated.
pub(crate) const TIERS: [HardwareTier; 8] = [
	HardwareTier {
		camera_range: (2, 8),
		cpu_descriptor: CORE_I5,
		core_count: "2-4",
		ram_gb: 8,
	},
	HardwareTier {
		camera_range: (9, 16),
		cpu_descriptor: CORE_I5,
		core_count: "4",
		ram_gb: 16,
	},
	HardwareTier {
		camera_range: (17, 32),
		cpu_descriptor: CORE_I5,
		core_count: "4",
		ram_gb: 32,
	},
	HardwareTier {
		camera_range: (33, 64),
		cpu_descriptor: CORE_I5,
		core_count: "6",
		ram_gb: 64,
	},
	HardwareTier {
		camera_range: (65, 100),
		cpu_descriptor: XEON_E5,
		core_count: "8",
		ram_gb: 96,
	},
	HardwareTier {
		camera_range: (101, 200),
		cpu_descriptor: XEON_E5,
		core_count: "10",
		ram_gb: 128,
	},
	HardwareTier {
		camera_range: (201, 400),
		cpu_descriptor: XEON_E5,
		core_count: "12",
		ram_gb: 192,
	},
	HardwareTier {
		camera_range: (401, 500),
		cpu_descriptor: XEON_E5,
		core_count: "14",
		ram_gb: 256,
	},
];

/// Select the hardware tier for a camera count.
///
/// First-match linear scan over the ordered table. Counts below the first
/// bracket clamp to the first tier, counts above the last bracket clamp to
/// the last tier: sizing for out-of-range installations is approximate
/// rather than an error.
pub(crate) fn select_tier(cameras: u32) -> &'static HardwareTier {
	for tier in &TIERS {
		if tier.camera_range.0 <= cameras && cameras <= tier.camera_range.1 {
			return tier;
		}
	}
	if cameras < TIERS[0].camera_range.0 {
		&TIERS[0]
	} else {
		&TIERS[TIERS.len() - 1]
	}
}
