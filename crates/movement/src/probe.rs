use crate::body::{body_down, body_right, CharacterBody, SurfaceProbe};
use crate::config::GroundProbeConfig;
use crate::controller::CharacterMovement;

pub fn is_grounded(
    body: &impl CharacterBody,
    probe: &impl SurfaceProbe,
    config: &GroundProbeConfig,
) -> bool {
    let rotation = body.rotation_degrees();
    let down = body_down(rotation);
    let right = body_right(rotation);
    let origin = body.position() + down * config.start_offset;

    config
        .lateral_offsets
        .iter()
        .any(|offset| probe.cast_ray(origin + right * *offset, down, config.ray_length))
}

impl CharacterMovement {
    pub fn is_grounded(&self, body: &impl CharacterBody, probe: &impl SurfaceProbe) -> bool {
        is_grounded(body, probe, &self.config.probe)
    }
}
