//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Gyre Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Gyre"
# width = 1280           # 320-8192
# height = 800           # 320-8192
# show_fps = false       # append a live FPS readout to the title

[scene]
# background_color = "#123359"
# core_color = "#ff8000"    # surface color at the sphere's center
# shell_color = "#00000d"   # surface color toward the outer shell
# rim_color = "#007acc"     # fresnel edge light
# rim_strength = 0.8        # 0.0-5.0
# vignette_radius = 0.7     # 0.1-2.0
# spin_speed = 0.3          # 0.0-5.0
# pulse_speed = 0.5         # 0.0-5.0
# time_step = 0.005         # animation time per frame, 0.0001-0.1

[march]
# max_steps = 256           # 16-1024, higher = sharper silhouettes, more GPU
# max_distance = 5.0        # 1.0-100.0
# surface_epsilon = 0.0001  # 0.000001-0.01

[pointer]
# enabled = true
# damping = 0.05            # per-frame easing toward the cursor, 0.001-1.0
# influence = 0.07          # view tilt strength, 0.0-1.0
"##
    .to_string()
}
