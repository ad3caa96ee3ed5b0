mod work_slip;
