// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Kleinster Puffer (Zellen pro Seite), damit um jeden Saatpunkt eine volle
    /// 3x3-Nachbarschaft existiert.
    pub const MIN_BUFFER: usize = 2;
    /// Gitterdimensionen werden auf ein Vielfaches dieses Wertes aufgerundet.
    pub const DIMENSION_MULTIPLE: usize = 10;
}

/// Quantisierung von Grad-Koordinaten in ganzzahlige Gittereinheiten.
pub mod quantization {
    /// Multipliziert mit dem Skalierungsfaktor und schneidet Richtung Null ab.
    ///
    /// Für negative Werte entspricht das `-floor(|x| * scale)`, d.h. auf der
    /// Südhalbkugel ist `q(max) - q(x) == floor(|x| * scale) - floor(|max| * scale)`.
    pub fn quantize(value: f64, scale: f64) -> i64 {
        (value * scale).trunc() as i64
    }
}

/// Rundungs-Hilfsfunktionen
pub mod rounding {
    /// Kleinstes Vielfaches von `multiple`, das >= `value` ist.
    pub fn ceil_to_multiple(value: usize, multiple: usize) -> usize {
        if multiple == 0 {
            return value;
        }
        value.div_ceil(multiple) * multiple
    }
}
