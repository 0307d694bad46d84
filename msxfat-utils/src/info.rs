use msxfat::error::Error;
use msxfat::io::std::FileDisk;
use msxfat::io::IO;
use msxfat::{has_partition_table, partitions, SectorBuffer};

pub fn info(image: &str, args: &super::Info) -> Result<(), Error<std::io::Error>> {
    let mut disk = FileDisk::open(image).map_err(|e| Error::IO(e))?;
    let mut buf = SectorBuffer::new();
    disk.read_sector(0.into(), &mut buf).map_err(|e| Error::IO(e))?;
    if args.dump {
        println!("{}", pretty_hex::pretty_hex(buf.raw()));
    }
    println!("{}: {} sectors", image, disk.sector_count());
    if has_partition_table(&mut disk)? {
        println!("Sunrise IDE partition table:");
        for (number, entry) in partitions(&mut disk)? {
            let boot = if entry.boot_ind == 0x80 { " boot" } else { "" };
            println!(
                "  {:2}: start {:6} size {:6} type {:#04x}{}",
                number,
                entry.start.to_ne(),
                entry.size.to_ne(),
                entry.sys_ind,
                boot
            );
        }
    } else {
        let boot = buf.boot();
        println!("  media descriptor {:#04x}", boot.descriptor);
        println!(
            "  {} bytes/sector, {} sectors/cluster, {} sides",
            boot.bytes_per_sector.to_ne(),
            boot.sectors_per_cluster,
            boot.side_count.to_ne()
        );
        println!("  {} FATs x {} sectors", boot.fat_count, boot.sectors_per_fat.to_ne());
        println!(
            "  {} root entries, {} sectors total",
            boot.dir_entries.to_ne(),
            boot.sector_count.to_ne()
        );
        if boot.has_vol_id() {
            println!("  volume id {:08X}", boot.dos2().vol_id.to_ne());
        }
    }
    Ok(())
}
