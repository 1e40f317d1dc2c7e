use cfd_profiles_core::{
    FireCurveConfig, HeightDatum, SimulationConfig, VerticalAxis, WindProfileConfig,
};

use crate::error::DefaultProfileError;

/// C-compatible profile configuration.
///
/// Flat mirror of the core `SimulationConfig`. Start from
/// `cfd_profiles_default_config()` and override the fields the case needs;
/// the values are validated once in `cfd_profiles_new`.
///
/// `vertical_axis` selects the coordinate treated as height: 0 = x, 1 = y, 2 = z.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileConfig {
    /// Aerodynamic roughness length (m)
    pub z0: f64,
    /// Minimum height below which the profile is constant (m)
    pub z_min: f64,
    /// Computational domain height (m)
    pub zone_height: f64,
    /// Fundamental basic wind velocity (m/s)
    pub vb0: f64,
    /// Directional factor
    pub c_dir: f64,
    /// Seasonal factor
    pub c_season: f64,
    /// Orography factor
    pub c0z: f64,
    /// Turbulence factor
    pub k_i: f64,
    /// Wind direction, clockwise degrees from true north
    pub wind_direction_deg: f64,
    /// True north correction (degrees)
    pub true_north_correction_deg: f64,

    /// Peak heat release rate (kW)
    pub hrr_max: f64,
    /// Fire growth coefficient (kW/s²)
    pub growth_coef: f64,
    /// Source volume (m³)
    pub src_vol: f64,
    /// Soot yield (kg/kg)
    pub soot_yield: f64,
    /// Heat of combustion (MJ/kg)
    pub heat_of_combustion: f64,

    /// Ground plane coordinate along the vertical axis (m)
    pub ground_z: f64,
    /// Vertical axis code (0 = x, 1 = y, 2 = z)
    pub vertical_axis: u8,
}

fn axis_code(axis: VerticalAxis) -> u8 {
    match axis {
        VerticalAxis::X => 0,
        VerticalAxis::Y => 1,
        VerticalAxis::Z => 2,
    }
}

impl From<&SimulationConfig> for ProfileConfig {
    fn from(config: &SimulationConfig) -> Self {
        let SimulationConfig { wind, fire, datum } = *config;
        Self {
            z0: wind.z0,
            z_min: wind.z_min,
            zone_height: wind.zone_height,
            vb0: wind.vb0,
            c_dir: wind.c_dir,
            c_season: wind.c_season,
            c0z: wind.c0z,
            k_i: wind.k_i,
            wind_direction_deg: wind.wind_direction_deg,
            true_north_correction_deg: wind.true_north_correction_deg,
            hrr_max: fire.hrr_max,
            growth_coef: fire.growth_coef,
            src_vol: fire.src_vol,
            soot_yield: fire.soot_yield,
            heat_of_combustion: fire.heat_of_combustion,
            ground_z: datum.ground_z,
            vertical_axis: axis_code(datum.vertical_axis),
        }
    }
}

impl ProfileConfig {
    /// Convert to the core configuration and validate it.
    pub(crate) fn to_simulation_config(self) -> Result<SimulationConfig, DefaultProfileError> {
        let vertical_axis = match self.vertical_axis {
            0 => VerticalAxis::X,
            1 => VerticalAxis::Y,
            2 => VerticalAxis::Z,
            other => {
                return Err(DefaultProfileError::invalid_parameter(
                    "vertical_axis",
                    &format!("must be 0, 1 or 2, got {other}"),
                ))
            }
        };

        let converted = SimulationConfig {
            wind: WindProfileConfig {
                z0: self.z0,
                z_min: self.z_min,
                zone_height: self.zone_height,
                vb0: self.vb0,
                c_dir: self.c_dir,
                c_season: self.c_season,
                c0z: self.c0z,
                k_i: self.k_i,
                wind_direction_deg: self.wind_direction_deg,
                true_north_correction_deg: self.true_north_correction_deg,
            },
            fire: FireCurveConfig {
                hrr_max: self.hrr_max,
                growth_coef: self.growth_coef,
                src_vol: self.src_vol,
                soot_yield: self.soot_yield,
                heat_of_combustion: self.heat_of_combustion,
            },
            datum: HeightDatum {
                ground_z: self.ground_z,
                vertical_axis,
            },
        };
        converted.validate()?;
        Ok(converted)
    }
}

/// Default configuration: category 0 terrain, 22 m/s from 270°, 400 m domain,
/// 2500 kW fire growing at 0.045 kW/s² in a 10.5 m³ source, z up from 0.
///
/// Example:
/// ```cpp
/// ProfileConfig config = cfd_profiles_default_config();
/// config.vb0 = 26.0;
/// config.z0 = 0.3;
/// config.z_min = 5.0;
/// ```
#[no_mangle]
pub extern "C" fn cfd_profiles_default_config() -> ProfileConfig {
    ProfileConfig::from(&SimulationConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProfileError, ProfileErrorCode};

    #[test]
    fn test_default_round_trip() {
        let config = cfd_profiles_default_config();
        assert_eq!(config.vertical_axis, 2);
        assert_eq!(config.z0, 0.003);
        assert_eq!(config.src_vol, 10.5);

        let converted = config.to_simulation_config().unwrap();
        assert_eq!(converted, SimulationConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let config = ProfileConfig {
            heat_of_combustion: -1.0,
            ..cfd_profiles_default_config()
        };
        let err = config.to_simulation_config().unwrap_err();
        assert_eq!(err.code(), ProfileErrorCode::InvalidConfig);
        assert!(err.msg().contains("heat_of_combustion"));
    }

    #[test]
    fn test_axis_code_selects_height_coordinate() {
        let config = ProfileConfig {
            vertical_axis: 1,
            ground_z: 12.0,
            ..cfd_profiles_default_config()
        };
        let converted = config.to_simulation_config().unwrap();
        assert_eq!(converted.datum.vertical_axis, VerticalAxis::Y);
        assert_eq!(converted.datum.ground_z, 12.0);
        assert_eq!(ProfileConfig::from(&converted), config);
    }

    #[test]
    fn test_rejects_unknown_axis() {
        let config = ProfileConfig {
            vertical_axis: 3,
            ..cfd_profiles_default_config()
        };
        let err = config.to_simulation_config().unwrap_err();
        assert_eq!(err.code(), ProfileErrorCode::InvalidParameter);
    }
}
