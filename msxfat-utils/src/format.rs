use log::info;
use msxfat::error::Error;
use msxfat::io::std::FileDisk;
use msxfat::DiskPartition;

pub fn format(image: &str, args: &super::Format) -> Result<(), Error<std::io::Error>> {
    let mut disk = FileDisk::open(image).map_err(|e| Error::IO(e))?;
    let boot_type = crate::boot_type(args.dos1);
    match args.partition {
        Some(number) => {
            msxfat::check_fat12_partition(&mut disk, number)?;
            let mut view = DiskPartition::new(&mut disk, number)?;
            msxfat::format(&mut view, boot_type)?;
            info!("formatted partition {} of {}", number, image);
        }
        None => {
            msxfat::format(&mut disk, boot_type)?;
            info!("formatted {}", image);
        }
    }
    Ok(())
}
