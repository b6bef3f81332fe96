//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Marble Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# width = 800            # 1-16384
# height = 600           # 1-16384
# title = "Blue Marble"

[sphere]
# resolution = 100       # 2-2048 samples per axis

[camera]
# location = [0.0, 0.0, 5.0]
# direction = [0.0, 0.0, -1.0]
# up = [0.0, 1.0, 0.0]
# field_of_view = 45.0   # degrees, 1-179
# near = 0.01            # > 0
# far = 1000.0           # > near
# speed = 5.0            # units per second
# sensitivity = 0.1      # degrees per pixel

[light]
# direction = [0.0, 0.0, -1.0]
# intensity = 1.0        # 0.0-10.0

[model]
# rotation_x_degrees = 90.0

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARN, ERROR
"##
    .to_string()
}
