use keycanvas_types::{Address, KeyCanvasError, Result};
use qr_code::QrCode;

/// Quiet-zone width, in modules, around terminal QR codes.
const TEXT_QR_BORDER: u8 = 3;

fn encode(address: &Address) -> Result<QrCode> {
    QrCode::new(address.as_str()).map_err(|e| KeyCanvasError::Qr(format!("{:?}", e)))
}

/// Render the address as a QR code made of half-block characters, for a terminal.
pub fn address_to_text_qr(address: &Address) -> Result<String> {
    Ok(encode(address)?.to_string(true, TEXT_QR_BORDER))
}

/// Render the address as a monochrome BMP with a one-module white border.
///
/// `pixel_per_module` scales each module; 0 and 1 both leave it at one pixel.
pub fn address_to_bmp_qr(address: &Address, pixel_per_module: u8) -> Result<Vec<u8>> {
    let mut bmp = encode(address)?
        .to_bmp()
        .add_white_border(1)
        .map_err(|e| KeyCanvasError::Qr(format!("{:?}", e)))?;
    if pixel_per_module > 1 {
        bmp = bmp
            .mul(pixel_per_module)
            .map_err(|e| KeyCanvasError::Qr(format!("{:?}", e)))?;
    }

    let mut bytes = Vec::new();
    bmp.write(&mut bytes)
        .map_err(|e| KeyCanvasError::Qr(format!("{:?}", e)))?;
    tracing::debug!(address = %address, size = bytes.len(), "rendered qr bitmap");
    Ok(bytes)
}

/// File name for a saved QR image: `keycanvas-bitcoin-<first 8 chars>.bmp`.
///
/// Characters outside `[A-Za-z0-9_-]` become `_`, so the name never leaves
/// the target directory.
pub fn qr_file_name(address: &Address) -> String {
    let head: String = address
        .as_str()
        .chars()
        .take(8)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("keycanvas-bitcoin-{}.bmp", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq";

    #[test]
    fn test_text_qr_is_square_block() {
        let address = Address::new(ADDR).unwrap();
        let qr = address_to_text_qr(&address).unwrap();
        let lines: Vec<&str> = qr.lines().filter(|l| !l.is_empty()).collect();
        assert!(lines.len() > 10);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_text_qr_deterministic() {
        let address = Address::new(ADDR).unwrap();
        assert_eq!(
            address_to_text_qr(&address).unwrap(),
            address_to_text_qr(&address).unwrap()
        );
    }

    #[test]
    fn test_bmp_header() {
        let address = Address::new(ADDR).unwrap();
        let bmp = address_to_bmp_qr(&address, 4).unwrap();
        assert_eq!(&bmp[..2], b"BM");
    }

    #[test]
    fn test_bmp_scaling_grows_output() {
        let address = Address::new(ADDR).unwrap();
        let small = address_to_bmp_qr(&address, 1).unwrap();
        let large = address_to_bmp_qr(&address, 8).unwrap();
        assert!(large.len() > small.len());
    }

    #[test]
    fn test_qr_file_name() {
        let address = Address::new(ADDR).unwrap();
        assert_eq!(qr_file_name(&address), "keycanvas-bitcoin-bc1qar0s.bmp");
        let short = Address::new("1ab").unwrap();
        assert_eq!(qr_file_name(&short), "keycanvas-bitcoin-1ab.bmp");
    }

    #[test]
    fn test_qr_file_name_replaces_path_characters() {
        let slashed = Address::new("ab/cdefghijklmnopqrstuvwxyz0123").unwrap();
        assert_eq!(qr_file_name(&slashed), "keycanvas-bitcoin-ab_cdefg.bmp");
        let parent = Address::new("../../pwned-address-long-enough-xx").unwrap();
        assert_eq!(qr_file_name(&parent), "keycanvas-bitcoin-______pw.bmp");
        let wide = Address::new(r"bc1q\é:*x").unwrap();
        assert_eq!(qr_file_name(&wide), "keycanvas-bitcoin-bc1q____.bmp");
    }
}
