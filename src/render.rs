use std::io::{self, Write};

use crate::model::{PassRecord, SatelliteInfo, TleRecord, VisualPassesResponse};

fn write_info(out: &mut impl Write, info: &SatelliteInfo) -> io::Result<()> {
    writeln!(out, "Satellite name     : {}", info.name)?;
    writeln!(out, "Satellite ID       : {}", info.id)?;
    writeln!(out, "Transactions Count : {}", info.transaction_count)
}

pub fn write_tle(out: &mut impl Write, record: &TleRecord) -> io::Result<()> {
    write_info(out, &record.info)?;
    writeln!(out, "TLE                : ")?;
    writeln!(out, "{}", record.tle)
}

pub fn write_visual_passes(
    out: &mut impl Write,
    response: &VisualPassesResponse,
) -> io::Result<()> {
    write_info(out, &response.info)?;
    writeln!(
        out,
        "Passes Count       : {}",
        response.info.pass_count.unwrap_or_default()
    )?;

    for (i, pass) in response.passes.iter().enumerate() {
        writeln!(out, "Pass {:2}:", i)?;
        write_pass(out, pass)?;
    }
    Ok(())
}

fn write_pass(out: &mut impl Write, pass: &PassRecord) -> io::Result<()> {
    writeln!(out, "  StartUTC         : {}", pass.start_time)?;
    writeln!(out, "  StartAz          : {:.6}", pass.start_azimuth)?;
    writeln!(out, "  StartAzCompass   : {}", pass.start_azimuth_compass)?;
    writeln!(out, "  StartEl          : {:.6}", pass.start_elevation)?;
    writeln!(out, "  MaxUTC           : {}", pass.max_time)?;
    writeln!(out, "  MaxAz            : {:.6}", pass.max_azimuth)?;
    writeln!(out, "  MaxAzCompass     : {}", pass.max_azimuth_compass)?;
    writeln!(out, "  MaxEl            : {:.6}", pass.max_elevation)?;
    writeln!(out, "  EndUTC           : {}", pass.end_time)?;
    writeln!(out, "  EndAz            : {:.6}", pass.end_azimuth)?;
    writeln!(out, "  EndAzCompass     : {}", pass.end_azimuth_compass)?;
    writeln!(out, "  EndEl            : {:.6}", pass.end_elevation)?;
    writeln!(out, "  Mag              : {:.6}", pass.magnitude)?;
    writeln!(out, "  Duration         : {}", pass.duration_seconds)?;
    writeln!(out, "  Start Visibility : {}", pass.start_visibility_time)
}
