use serde::Serialize;

/// Per-camera recording bandwidth, Mbit/s
const WRITE_MBPS_PER_CAMERA: u32 = 8;
/// Per-camera playback bandwidth, Mbit/s
const READ_MBPS_PER_CAMERA: u32 = 16;

/// Aggregate archive bandwidth required for a camera count.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct Throughput {
	pub(crate) write_mbps: u32,
	pub(crate) read_mbps: u32,
}

/// Aggregate ingest and playback bandwidth, linear in the camera count.
pub(crate) fn estimate_throughput(cameras: u32) -> Throughput {
	Throughput {
		write_mbps: cameras * WRITE_MBPS_PER_CAMERA,
		read_mbps: cameras * READ_MBPS_PER_CAMERA,
	}
}
