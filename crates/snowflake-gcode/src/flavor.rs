//! G-code flavor definitions.

use serde::{Deserialize, Serialize};

/// G-code flavor (dialect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GcodeFlavor {
    /// Marlin firmware (Ender, Prusa, most pen-plotter conversions).
    #[default]
    Marlin,
    /// Klipper firmware.
    Klipper,
    /// Grbl (CNC routers, laser and drawing machines).
    Grbl,
}

impl GcodeFlavor {
    /// Get the start G-code for this flavor.
    pub fn start_gcode(&self) -> &'static str {
        match self {
            GcodeFlavor::Marlin => {
                "G21 ; Millimeters\n\
                 G90 ; Absolute positioning\n\
                 G28 ; Home all axes\n"
            }
            GcodeFlavor::Klipper => {
                "G21\n\
                 G90\n\
                 G28\n"
            }
            GcodeFlavor::Grbl => {
                "G21 ; Millimeters\n\
                 G90 ; Absolute positioning\n\
                 G17 ; XY plane\n"
            }
        }
    }

    /// Get the end G-code for this flavor.
    pub fn end_gcode(&self) -> &'static str {
        match self {
            GcodeFlavor::Marlin => {
                "G28 X Y ; Park\n\
                 M84 ; Disable motors\n"
            }
            GcodeFlavor::Klipper => {
                "G28 X Y\n\
                 M84\n"
            }
            GcodeFlavor::Grbl => {
                "G0 X0 Y0 ; Return to origin\n\
                 M2 ; Program end\n"
            }
        }
    }

    /// Does this flavor need homing before the first move?
    pub fn homes_on_start(&self) -> bool {
        matches!(self, GcodeFlavor::Marlin | GcodeFlavor::Klipper)
    }
}

impl std::str::FromStr for GcodeFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "marlin" => Ok(GcodeFlavor::Marlin),
            "klipper" => Ok(GcodeFlavor::Klipper),
            "grbl" => Ok(GcodeFlavor::Grbl),
            other => Err(format!("unknown G-code flavor: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_end_with_newline() {
        for flavor in [GcodeFlavor::Marlin, GcodeFlavor::Klipper, GcodeFlavor::Grbl] {
            assert!(flavor.start_gcode().ends_with('\n'));
            assert!(flavor.end_gcode().ends_with('\n'));
            assert!(flavor.start_gcode().contains("G90"));
        }
    }

    #[test]
    fn test_homing() {
        assert!(GcodeFlavor::Marlin.homes_on_start());
        assert!(GcodeFlavor::Marlin.start_gcode().contains("G28"));
        assert!(!GcodeFlavor::Grbl.homes_on_start());
        assert!(!GcodeFlavor::Grbl.start_gcode().contains("G28"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("GRBL".parse::<GcodeFlavor>(), Ok(GcodeFlavor::Grbl));
        assert_eq!("klipper".parse::<GcodeFlavor>(), Ok(GcodeFlavor::Klipper));
        assert!("smoothie".parse::<GcodeFlavor>().is_err());
    }
}
