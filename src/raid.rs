use log::debug;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Upper bound on the base-disk search. Arrays beyond this are not a
/// configuration this hardware line ships.
const SEARCH_LIMIT: u32 = 200;

/// Smallest viable RAID6 group when a large array is split into two groups
const MIN_GROUP: u32 = 4;

/// Largest array served by a single RAID6 group. Above this the array is
/// split into two striped groups, and hot spares start being provisioned.
const SINGLE_GROUP_LIMIT: u32 = 16;

/// One hot spare is reserved per this many base disks
const SPARE_INTERVAL: u32 = 18;

/// The disk grouping scheme selected for an array size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) enum RaidLayout {
	/// Mirrored pair, 2 disks
	Mirror,
	/// Single parity group (RAID5)
	SingleParity {
		disks: u32,
	},
	/// Double parity group (RAID6)
	DoubleParity {
		disks: u32,
	},
	/// Two double-parity groups striped together (RAID60)
	StripedDoubleParity {
		group_a: u32,
		group_b: u32,
	},
	/// No disk count within the search bound satisfies the requirement
	Unsolvable,
}

impl Display for RaidLayout {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Mirror => write!(f, "RAID1 (2 disks)"),
			Self::SingleParity {
				disks,
			} => write!(f, "RAID5 ({disks} disks)"),
			Self::DoubleParity {
				disks,
			} => write!(f, "RAID6 ({disks} disks)"),
			Self::StripedDoubleParity {
				group_a,
				group_b,
			} => write!(f, "RAID60 (2xRAID6: {group_a}+{group_b} disks)"),
			Self::Unsolvable => write!(f, "no feasible configuration (increase disk size)"),
		}
	}
}

/// The storage plan computed for a capacity requirement. Built once per
/// sizing request and never mutated.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StoragePlan {
	/// Disks carrying data and parity, excluding hot spares
	pub(crate) base_disks: u32,
	/// Standby disks reserved for automatic rebuild
	pub(crate) hot_spares: u32,
	/// All physical disks in the array
	pub(crate) total_disks: u32,
	/// The grouping scheme the disk count maps to
	pub(crate) layout: RaidLayout,
	/// Capacity available for data after parity overhead, in terabytes
	pub(crate) usable_tb: f64,
	/// Usable capacity the requirement inflates to under the fill factor
	pub(crate) required_usable_tb: f64,
	/// Total physical capacity of all disks, in terabytes
	pub(crate) raw_tb: f64,
}

impl StoragePlan {
	/// Whether the engine found a configuration satisfying the requirement
	pub(crate) fn is_feasible(&self) -> bool {
		self.layout != RaidLayout::Unsolvable
	}
}

/// Usable capacity units and grouping scheme for a base disk count.
///
/// The unit is one disk's capacity. The rule follows the vendor sizing
/// table: a 2-disk array mirrors, 3 to 6 disks form one single-parity
/// group, 7 to 16 disks form one double-parity group, and larger arrays
/// split into two double-parity groups striped together. The split keeps
/// the groups as balanced as possible, and a group is never allowed to
/// fall below 4 disks.
pub(crate) fn usable_units(base_disks: u32) -> (u32, Option<RaidLayout>) {
	if base_disks < 2 {
		return (0, None);
	}
	if base_disks == 2 {
		return (1, Some(RaidLayout::Mirror));
	}
	if base_disks <= 6 {
		return (
			base_disks - 1,
			Some(RaidLayout::SingleParity {
				disks: base_disks,
			}),
		);
	}
	if base_disks <= SINGLE_GROUP_LIMIT {
		return (
			base_disks - 2,
			Some(RaidLayout::DoubleParity {
				disks: base_disks,
			}),
		);
	}
	// Split into two groups, larger one first
	let mut group_a = base_disks.div_ceil(2);
	let mut group_b = base_disks - group_a;
	// Rebalance if the smaller group would not be a viable RAID6 group
	if group_b < MIN_GROUP {
		group_b = MIN_GROUP;
		group_a = base_disks - group_b;
	}
	let units = group_a.saturating_sub(2) + group_b.saturating_sub(2);
	(
		units,
		Some(RaidLayout::StripedDoubleParity {
			group_a,
			group_b,
		}),
	)
}

/// Hot spares provisioned for a base disk count. Spares are only reserved
/// once the array outgrows a single RAID6 group, at one spare per 18 base
/// disks.
fn hot_spares(base_disks: u32) -> u32 {
	if base_disks > SINGLE_GROUP_LIMIT {
		base_disks.div_ceil(SPARE_INTERVAL)
	} else {
		0
	}
}

/// Find the minimal disk array satisfying an effective capacity requirement.
///
/// The requirement is first inflated by the fill factor (an array must
/// never be provisioned to 100% of its usable capacity), then candidate
/// base-disk counts are tried upward from 2. Usable capacity is
/// non-decreasing in the disk count within each grouping regime, so the
/// first count that satisfies the requirement is also the minimal one.
///
/// If no count within the search bound satisfies the requirement, a
/// sentinel plan with zero disks and an `Unsolvable` layout is returned.
/// Callers should suggest a larger disk size rather than treat this as an
/// error.
pub(crate) fn plan_storage(required_effective_tb: f64, disk_tb: f64, fill_factor: f64) -> StoragePlan {
	// Inflate the requirement to leave fill headroom
	let required_usable_tb = required_effective_tb / fill_factor;
	// First-fit search over candidate base disk counts
	for base_disks in 2..=SEARCH_LIMIT {
		let (units, layout) = usable_units(base_disks);
		let usable_tb = units as f64 * disk_tb;
		debug!("candidate base_disks={base_disks} usable={usable_tb:.2} required={required_usable_tb:.2}");
		if usable_tb >= required_usable_tb {
			let layout = layout.unwrap_or(RaidLayout::Unsolvable);
			let hot_spares = hot_spares(base_disks);
			let total_disks = base_disks + hot_spares;
			return StoragePlan {
				base_disks,
				hot_spares,
				total_disks,
				layout,
				usable_tb,
				required_usable_tb,
				raw_tb: total_disks as f64 * disk_tb,
			};
		}
	}
	// No feasible configuration at this disk size
	StoragePlan {
		base_disks: 0,
		hot_spares: 0,
		total_disks: 0,
		layout: RaidLayout::Unsolvable,
		usable_tb: 0.0,
		required_usable_tb,
		raw_tb: 0.0,
	}
}

#[cfg(test)]
mod tests {
	use super::{hot_spares, plan_storage, usable_units, RaidLayout, SEARCH_LIMIT};

	#[test]
	fn usable_capacity_is_monotonic_within_each_regime() {
		// Monotone within each grouping regime, which is what makes the
		// first-fit search minimal. Across the 16-disk boundary usable
		// capacity dips (RAID60 pays two extra parity disks), so counts
		// just above it are simply never selected.
		for band in [2..=2u32, 3..=6, 7..=16, 17..=SEARCH_LIMIT] {
			let mut previous = 0;
			for base_disks in band {
				let (units, _) = usable_units(base_disks);
				assert!(units >= previous, "usable units decreased at {base_disks} disks");
				previous = units;
			}
		}
	}

	#[test]
	fn two_disks_mirror() {
		let (units, layout) = usable_units(2);
		assert_eq!(units, 1);
		assert_eq!(layout, Some(RaidLayout::Mirror));
	}

	#[test]
	fn degenerate_counts_have_no_layout() {
		assert_eq!(usable_units(0), (0, None));
		assert_eq!(usable_units(1), (0, None));
	}

	#[test]
	fn single_parity_band() {
		let (units, layout) = usable_units(6);
		assert_eq!(units, 5);
		assert_eq!(
			layout,
			Some(RaidLayout::SingleParity {
				disks: 6
			})
		);
	}

	#[test]
	fn double_parity_band() {
		let (units, layout) = usable_units(16);
		assert_eq!(units, 14);
		assert_eq!(
			layout,
			Some(RaidLayout::DoubleParity {
				disks: 16
			})
		);
	}

	#[test]
	fn large_arrays_split_into_balanced_groups() {
		let (units, layout) = usable_units(17);
		assert_eq!(
			layout,
			Some(RaidLayout::StripedDoubleParity {
				group_a: 9,
				group_b: 8,
			})
		);
		assert_eq!(units, 7 + 6);
		let (units, layout) = usable_units(24);
		assert_eq!(
			layout,
			Some(RaidLayout::StripedDoubleParity {
				group_a: 12,
				group_b: 12,
			})
		);
		assert_eq!(units, 20);
	}

	#[test]
	fn plan_meets_requirement_when_feasible() {
		for cameras in [4, 32, 120, 400] {
			let plan = plan_storage(cameras as f64 * 1.4, 16.0, 0.77);
			assert!(plan.is_feasible());
			assert!(plan.usable_tb >= plan.required_usable_tb);
			assert_eq!(plan.total_disks, plan.base_disks + plan.hot_spares);
		}
	}

	#[test]
	fn reference_scenario_32_cameras() {
		// 32 cameras at 1.4 TB each on 16 TB disks with 0.77 fill:
		// required usable is 58.18 TB, and the first disk count whose
		// usable capacity covers it is a 5-disk RAID5 (4 x 16 = 64 TB)
		let plan = plan_storage(44.8, 16.0, 0.77);
		assert_eq!(plan.base_disks, 5);
		assert_eq!(plan.hot_spares, 0);
		assert_eq!(plan.total_disks, 5);
		assert_eq!(
			plan.layout,
			RaidLayout::SingleParity {
				disks: 5
			}
		);
		assert_eq!(plan.usable_tb, 64.0);
		assert!((plan.required_usable_tb - 58.18).abs() < 0.01);
		assert_eq!(plan.raw_tb, 80.0);
	}

	#[test]
	fn double_parity_selected_once_single_parity_band_is_exhausted() {
		// 120 cameras at 1.4 TB each on 16 TB disks: 218.18 TB usable
		// needed, beyond the largest RAID5 (5 x 16 = 80 TB), so the
		// search lands in the RAID6 band at 16 disks (14 x 16 = 224 TB)
		let plan = plan_storage(168.0, 16.0, 0.77);
		assert_eq!(plan.base_disks, 16);
		assert_eq!(
			plan.layout,
			RaidLayout::DoubleParity {
				disks: 16
			}
		);
		assert_eq!(plan.usable_tb, 224.0);
	}

	#[test]
	fn spares_start_above_sixteen_base_disks() {
		assert_eq!(hot_spares(16), 0);
		assert_eq!(hot_spares(17), 1);
		assert_eq!(hot_spares(36), 2);
		assert_eq!(hot_spares(37), 3);
	}

	#[test]
	fn plans_around_the_single_group_boundary() {
		// 53 TB usable on 4 TB disks fits a full 16-disk RAID6, no spares
		let plan = plan_storage(53.0 * 0.77, 4.0, 0.77);
		assert_eq!(plan.base_disks, 16);
		assert_eq!(plan.hot_spares, 0);
		// 57.1 TB usable outgrows a single group; the first split layout
		// that beats 16 disks is 19 base disks, which brings spares in
		let plan = plan_storage(44.0, 4.0, 0.77);
		assert_eq!(plan.base_disks, 19);
		assert_eq!(plan.hot_spares, 2);
		assert_eq!(plan.total_disks, 21);
		assert_eq!(
			plan.layout,
			RaidLayout::StripedDoubleParity {
				group_a: 10,
				group_b: 9,
			}
		);
	}

	#[test]
	fn infeasible_requirement_returns_sentinel() {
		let plan = plan_storage(100_000.0, 4.0, 0.77);
		assert!(!plan.is_feasible());
		assert_eq!(plan.base_disks, 0);
		assert_eq!(plan.total_disks, 0);
		assert_eq!(plan.usable_tb, 0.0);
		assert_eq!(plan.raw_tb, 0.0);
		assert!(plan.required_usable_tb > 0.0);
	}

	#[test]
	fn planning_is_idempotent() {
		let a = plan_storage(44.8, 16.0, 0.77);
		let b = plan_storage(44.8, 16.0, 0.77);
		assert_eq!(a.base_disks, b.base_disks);
		assert_eq!(a.layout, b.layout);
		assert_eq!(a.usable_tb, b.usable_tb);
	}
}
