use argh::FromArgs;
use std::{fs::File, io::BufWriter, path::PathBuf, str::FromStr};

use stencil::{filters, matrix::Matrix};

/// The filter to run on the loaded image.
#[derive(Clone, Copy, Debug)]
enum FilterKind {
    Normalize,
    Quantize,
    Blur,
    Sobel,
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normalize" => Ok(Self::Normalize),
            "quantize" | "quantization" => Ok(Self::Quantize),
            "blur" => Ok(Self::Blur),
            "sobel" => Ok(Self::Sobel),
            _ => Err(format!("Invalid filter: {s}")),
        }
    }
}

#[derive(FromArgs)]
/// Apply a 3x3 stencil filter to a grayscale image stored as text
struct Args {
    /// path to the input image, whitespace separated intensities in row-major order
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// the number of rows of the image
    #[argh(option)]
    rows: usize,

    /// the number of columns of the image
    #[argh(option)]
    cols: usize,

    /// the filter to apply: normalize, quantize, blur or sobel
    #[argh(option, short = 'f')]
    filter: FilterKind,

    /// the number of levels for the quantize filter
    #[argh(option, default = "4")]
    levels: u32,

    /// path to write the result to, standard output when omitted
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut image = Matrix::new(args.rows, args.cols)?;
    let num_read = image.read_from(File::open(&args.input)?)?;
    if num_read != image.numel() {
        log::warn!(
            "{} holds {num_read} values for a {}x{} image",
            args.input.display(),
            args.rows,
            args.cols
        );
    }

    log::info!("applying {:?} to a {}x{} image", args.filter, args.rows, args.cols);

    let result = match args.filter {
        FilterKind::Normalize => filters::normalize(image),
        FilterKind::Quantize => filters::quantization(&image, args.levels)?,
        FilterKind::Blur => filters::blur(&image)?,
        FilterKind::Sobel => filters::sobel(&image)?,
    };

    match &args.output {
        Some(path) => {
            result.write_to(BufWriter::new(File::create(path)?))?;
            log::info!("wrote result to {}", path.display());
        }
        None => {
            result.print();
            println!();
        }
    }

    Ok(())
}
