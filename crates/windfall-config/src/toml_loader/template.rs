//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# windfall configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
#
# Configure sway to place new floating windows at (arena.spawn_x, arena.spawn_y)
# so they drop into the arena from above, e.g.
#   for_window [floating] move absolute position 200 -1500

[workspace]
output = "eDP-1"
workspace = "9"          # a workspace name, or "all"
# only_when_focused = true
# tick_rate = 30         # 1-240 Hz

[arena]
# height = 40.0          # physics units
# discard_height = 25.0  # windows rising above this are killed
# scale = 0.0078125      # physics units per pixel (1/128)
# spawn_x = 200
# spawn_y = -1500
# out_of_bounds = "respawn"  # respawn, close
# oob_margin = 0.05
# static_mark = "windfall_static"

[physics]
# gravitational_constant = 0.0   # 0 disables window-to-window attraction
# flat_gravity = [0.0, -2.0]
# restitution = 0.75     # 0.0-1.0
# friction = 0.2
# density = 8.0
# drag_scale = 8.0
# velocity_iterations = 10
# position_iterations = 10
# min_contact_impulse = 1.0

[audio]
# enabled = true
# update_interval_ms = 50
# fetch_interval_ms = 1000
# pw_cli = "pw-cli"
# pw_dump = "pw-dump"

[ipc]
# socket = "/run/user/1000/sway-ipc.sock"   # defaults to $SWAYSOCK
# timeout_ms = 1000

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
