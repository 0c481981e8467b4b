use crate::geo::GeoPoint3D;
use crate::upstream::UpstreamError;

const METADATA_MARKER: &str = "stn_metadata";

/// Find the first `<magnitude> N|S <magnitude> E|W` run in free text.
/// Returns `(latitude_deg, longitude_deg)` with S and W negated.
pub fn parse_coordinate_text(text: &str) -> Option<(f64, f64)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    tokens.windows(4).find_map(|w| {
        let lat = parse_magnitude(w[0])?;
        let lat_sign = match w[1] {
            "N" => 1.0,
            "S" => -1.0,
            _ => return None,
        };
        let lon = parse_magnitude(w[2])?;
        let lon_sign = match w[3] {
            "E" => 1.0,
            "W" => -1.0,
            _ => return None,
        };
        Some((lat * lat_sign, lon * lon_sign))
    })
}

/// Decimal degrees written as `ddd.ddd`, no sign.
fn parse_magnitude(token: &str) -> Option<f64> {
    let (whole, frac) = token.split_once('.')?;
    if whole.is_empty()
        || frac.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !frac.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    token.parse().ok()
}

/// Pull the station position out of a station page. The position is assumed to be at sea level.
pub fn parse_station_page(html: &str) -> Option<GeoPoint3D> {
    let start = html.find(METADATA_MARKER).unwrap_or(0);

    bold_segments(&html[start..])
        .into_iter()
        .find_map(|segment| parse_coordinate_text(&segment))
        .map(|(lat, lon)| GeoPoint3D::new(lon, lat, 0.0))
}

/// Text content of every `<b>` element, inner tags stripped.
fn bold_segments(html: &str) -> Vec<String> {
    // ASCII lowercasing keeps byte offsets aligned with `html`
    let lower = html.to_ascii_lowercase();
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = lower[cursor..].find("<b") {
        let open = cursor + rel;
        let after_name = open + 2;
        match lower.as_bytes().get(after_name) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') => {}
            _ => {
                cursor = after_name;
                continue;
            }
        }
        let Some(gt) = lower[after_name..].find('>') else {
            break;
        };
        let body_start = after_name + gt + 1;
        let Some(close) = lower[body_start..].find("</b>") else {
            break;
        };
        let body_end = body_start + close;
        segments.push(strip_tags(&html[body_start..body_end]));
        cursor = body_end + 4;
    }

    segments
}

fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
}

pub async fn fetch_station(
    client: &reqwest::Client,
    base_url: &str,
    station_id: &str,
) -> Result<GeoPoint3D, UpstreamError> {
    let response = client
        .get(base_url)
        .query(&[("station", station_id)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            url: response.url().to_string(),
            status: status.as_u16(),
        });
    }

    let html = response.text().await?;
    parse_station_page(&html).ok_or_else(|| UpstreamError::CoordinatesNotFound(station_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
<div id="header"><b>National Data Buoy Center</b></div>
<div id="stn_metadata">
  <p>Owned and maintained by National Data Buoy Center<br>
  <b>Weather Buoy</b><br>
  <b>23.535 N 162.270 W (23&#176;32'6" N 162&#176;16'12" W)</b><br>
  <b>Site elevation:</b> sea level<br>
  </p>
</div>
</body></html>
"#;

    #[test]
    fn coordinate_text_applies_hemispheres() {
        assert_eq!(parse_coordinate_text("23.535 N 162.270 W"), Some((23.535, -162.27)));
        assert_eq!(parse_coordinate_text("12.5 S 45.25 E"), Some((-12.5, 45.25)));
        assert_eq!(parse_coordinate_text("lead 0.0 N 0.0 E trail"), Some((0.0, 0.0)));
    }

    #[test]
    fn coordinate_text_needs_decimal_magnitudes() {
        assert_eq!(parse_coordinate_text("23 N 162 W"), None);
        assert_eq!(parse_coordinate_text("-23.5 N 162.0 W"), None);
        assert_eq!(parse_coordinate_text("23.5 X 162.0 W"), None);
        assert_eq!(parse_coordinate_text("Site elevation: sea level"), None);
    }

    #[test]
    fn station_page_yields_sea_level_point() {
        let point = parse_station_page(PAGE).unwrap();
        assert_eq!(point.latitude_deg, 23.535);
        assert_eq!(point.longitude_deg, -162.27);
        assert_eq!(point.altitude_km, 0.0);
    }

    #[test]
    fn page_without_coordinates() {
        let html = r#"<div id="stn_metadata"><b>Station 99999</b></div>"#;
        assert_eq!(parse_station_page(html), None);
        assert_eq!(parse_station_page(""), None);
    }

    #[test]
    fn bold_with_attributes_and_nested_tags() {
        let html = r#"<B class="x">10.000<i></i> S 20.500&nbsp;E</B><br><body>"#;
        let point = parse_station_page(html).unwrap();
        assert_eq!(point.latitude_deg, -10.0);
        assert_eq!(point.longitude_deg, 20.5);
    }
}
