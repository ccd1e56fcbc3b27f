use eframe::egui::viewport::IconData;

const PURPLE: [f32; 3] = [168.0, 85.0, 247.0];
const PINK: [f32; 3] = [236.0, 72.0, 153.0];

// Rounded square with a purple to pink diagonal gradient and a white "A".
pub fn generate_icon(size: u32) -> IconData {
    let w = size;
    let h = size;
    let s = size as f32;
    let mut rgba = vec![0u8; (w * h * 4) as usize];

    let margin = s * 0.06;
    let corner = s * 0.22;
    let stroke = s * 0.075;

    // Letter strokes: two legs and the bar
    let apex = (s * 0.50, s * 0.22);
    let left = (s * 0.28, s * 0.78);
    let right = (s * 0.72, s * 0.78);
    let bar = ((s * 0.37, s * 0.56), (s * 0.63, s * 0.56));

    for y in 0..h {
        for x in 0..w {
            let idx = ((y * w + x) * 4) as usize;
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            if !in_rounded_rect(px, py, margin, s - margin, corner) {
                continue;
            }
            let t = ((px + py) / (2.0 * s)).clamp(0.0, 1.0);
            let mut color = [
                lerp(PURPLE[0], PINK[0], t),
                lerp(PURPLE[1], PINK[1], t),
                lerp(PURPLE[2], PINK[2], t),
            ];

            let d = dist_to_segment(px, py, apex, left)
                .min(dist_to_segment(px, py, apex, right))
                .min(dist_to_segment(px, py, bar.0, bar.1));
            if d <= stroke * 0.5 {
                color = [255.0, 255.0, 255.0];
            }

            rgba[idx] = color[0] as u8;
            rgba[idx + 1] = color[1] as u8;
            rgba[idx + 2] = color[2] as u8;
            rgba[idx + 3] = 255;
        }
    }

    IconData { rgba, width: w, height: h }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn in_rounded_rect(px: f32, py: f32, lo: f32, hi: f32, r: f32) -> bool {
    if px < lo || px > hi || py < lo || py > hi {
        return false;
    }
    let cx = px.clamp(lo + r, hi - r);
    let cy = py.clamp(lo + r, hi - r);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}

fn dist_to_segment(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (ax, ay) = a;
    let (bx, by) = b;
    let (vx, vy) = (bx - ax, by - ay);
    let len2 = vx * vx + vy * vy;
    let t = if len2 == 0.0 { 0.0 } else { (((px - ax) * vx + (py - ay) * vy) / len2).clamp(0.0, 1.0) };
    let (qx, qy) = (ax + vx * t, ay + vy * t);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(icon: &IconData, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * icon.width + x) * 4) as usize;
        [icon.rgba[i], icon.rgba[i + 1], icon.rgba[i + 2], icon.rgba[i + 3]]
    }

    #[test]
    fn corners_are_transparent_and_apex_is_white() {
        let icon = generate_icon(64);
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
        assert_eq!(pixel(&icon, 0, 0)[3], 0);
        assert_eq!(pixel(&icon, 63, 63)[3], 0);
        assert_eq!(pixel(&icon, 32, 15), [255, 255, 255, 255]);
        // Background between the legs keeps the gradient.
        let bg = pixel(&icon, 32, 45);
        assert_eq!(bg[3], 255);
        assert_ne!(bg, [255, 255, 255, 255]);
    }
}
