use crate::raid::StoragePlan;
use crate::tier::HardwareTier;

/// Product-family prefix of the server line
const FAMILY_PREFIX: &str = "NTR";

/// Fixed RAID capability marker. The product name always advertises the
/// hardware-controller-backed double-parity marker, even when the sized
/// array is actually RAID1 or RAID5. This is intended naming policy for
/// the line, not a reflection of the computed layout, and is surprising
/// enough to call out here.
const RAID_MARKER: &str = "R6";

/// Fixed generation digit in the name template
const GENERATION: &str = "1";

/// Fixed trailing qualifier (hardware RAID controller)
const TRAILER: &str = "HR";

/// Chassis size class for a physical disk count. Each class maps to a
/// chassis with that many drive bays; there is no chassis above 24 bays,
/// and the sentinel plan's zero disks has no chassis either.
fn chassis_class(total_disks: u32) -> Option<&'static str> {
	match total_disks {
		1..=12 => Some("2"),
		13..=16 => Some("3"),
		17..=24 => Some("4"),
		_ => None,
	}
}

/// CPU family class for a tier's CPU model string. A two-way membership
/// test on the model name: the Xeon family gets one code, everything else
/// is the desktop Core family.
fn cpu_class(cpu_descriptor: &str) -> &'static str {
	if cpu_descriptor.contains("Xeon") {
		"X"
	} else {
		"C"
	}
}

/// Assemble the canonical product name for a sized configuration.
///
/// Returns `None` when the disk count exceeds the largest supported
/// chassis. That is a defined failure state, not an error: the caller is
/// expected to warn that no chassis in the line can hold the array.
pub(crate) fn build_name(cameras: u32, plan: &StoragePlan, tier: &HardwareTier) -> Option<String> {
	let chassis = chassis_class(plan.total_disks)?;
	let cpu = cpu_class(tier.cpu_descriptor);
	let usable = plan.usable_tb.round() as u64;
	Some(format!(
		"{FAMILY_PREFIX}{chassis}{cpu}{GENERATION}-{cameras}C{usable}T-{RAID_MARKER}-{ram}G-{TRAILER}",
		ram = tier.ram_gb
	))
}

#[cfg(test)]
mod tests {
	use super::{build_name, chassis_class, cpu_class};
	use crate::raid::plan_storage;
	use crate::tier::select_tier;

	#[test]
	fn chassis_classes_by_disk_count() {
		assert_eq!(chassis_class(1), Some("2"));
		assert_eq!(chassis_class(12), Some("2"));
		assert_eq!(chassis_class(13), Some("3"));
		assert_eq!(chassis_class(16), Some("3"));
		assert_eq!(chassis_class(17), Some("4"));
		assert_eq!(chassis_class(24), Some("4"));
		assert_eq!(chassis_class(25), None);
		assert_eq!(chassis_class(0), None);
	}

	#[test]
	fn cpu_family_codes() {
		assert_eq!(cpu_class("Intel Xeon E5 (2.1 GHz or better)"), "X");
		assert_eq!(cpu_class("Intel Core i5 Gen8 (2.1 GHz or better)"), "C");
	}

	#[test]
	fn assembles_name_from_template() {
		let plan = plan_storage(44.8, 16.0, 0.77);
		let tier = select_tier(32);
		let name = build_name(32, &plan, tier);
		assert_eq!(name.as_deref(), Some("NTR2C1-32C64T-R6-32G-HR"));
	}

	#[test]
	fn raid_marker_is_fixed_even_for_mirrors() {
		// A 2-disk mirror still advertises the R6 marker in its name
		let plan = plan_storage(2.0, 16.0, 0.77);
		let tier = select_tier(2);
		let name = build_name(2, &plan, tier).expect("mirror fits the smallest chassis");
		assert!(name.contains("-R6-"));
	}

	#[test]
	fn oversized_arrays_have_no_name() {
		// 400 cameras at 1.4 TB on 10 TB disks needs far more than 24 disks
		let plan = plan_storage(560.0, 10.0, 0.77);
		assert!(plan.total_disks > 24);
		let tier = select_tier(400);
		assert_eq!(build_name(400, &plan, tier), None);
	}

	#[test]
	fn sentinel_plan_has_no_name() {
		let plan = plan_storage(100_000.0, 4.0, 0.77);
		assert!(!plan.is_feasible());
		assert_eq!(build_name(500, &plan, select_tier(500)), None);
	}
}
