use log::info;
use msxfat::error::Error;
use msxfat::io::std::FileDisk;
use msxfat::{format, partition};

use crate::sizes;

pub fn create(image: &str, args: &super::Create) -> Result<(), Error<std::io::Error>> {
    let mut sectors = Vec::with_capacity(args.sizes.len());
    for size in &args.sizes {
        sectors.push(sizes::parse(size).map_err(invalid_input)?);
    }
    let boot_type = crate::boot_type(args.dos1);
    match sectors.as_slice() {
        &[nb_sectors] => {
            let mut disk = FileDisk::create(image, nb_sectors).map_err(|e| Error::IO(e))?;
            format(&mut disk, boot_type)?;
            info!("created {}: {} sectors", image, nb_sectors);
        }
        sectors => {
            let total = sectors
                .iter()
                .try_fold(1u32, |sum, &size| sum.checked_add(size))
                .ok_or_else(|| invalid_input("total size out of range".into()))?;
            let mut disk = FileDisk::create(image, total).map_err(|e| Error::IO(e))?;
            partition(&mut disk, sectors, boot_type)?;
            info!("created {}: {} partitions, {} sectors", image, sectors.len(), total);
        }
    }
    Ok(())
}

fn invalid_input(message: String) -> Error<std::io::Error> {
    Error::IO(std::io::Error::new(std::io::ErrorKind::InvalidInput, message))
}
