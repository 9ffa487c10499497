/// Declared license strings and the SPDX expression they map to, keyed by the
/// lowercased, trimmed declared string. Sorted by key so lookups can use a
/// binary search.
pub(super) const ALIASES: &[(&str, &str)] = &[
    ("2-clause bsd", "BSD-2-Clause"),
    ("2-clause bsd license", "BSD-2-Clause"),
    ("3-clause bsd", "BSD-3-Clause"),
    ("3-clause bsd license", "BSD-3-Clause"),
    ("4-clause bsd", "BSD-4-Clause"),
    ("academic free license 2.1", "AFL-2.1"),
    ("academic free license 3.0", "AFL-3.0"),
    ("academic free license, version 3.0", "AFL-3.0"),
    ("afl 2.1", "AFL-2.1"),
    ("afl 3.0", "AFL-3.0"),
    ("agpl", "AGPL-3.0-or-later"),
    ("agpl 3", "AGPL-3.0-only"),
    ("agpl 3+", "AGPL-3.0-or-later"),
    ("agpl 3.0", "AGPL-3.0-only"),
    ("agpl v3", "AGPL-3.0-only"),
    ("agpl-1.0", "AGPL-1.0-only"),
    ("agpl-3", "AGPL-3.0-only"),
    ("agpl-3+", "AGPL-3.0-or-later"),
    ("agpl-3.0", "AGPL-3.0-only"),
    ("agplv3", "AGPL-3.0-only"),
    ("agplv3 or later", "AGPL-3.0-or-later"),
    ("agplv3+", "AGPL-3.0-or-later"),
    ("al 2.0", "Apache-2.0"),
    ("alv2", "Apache-2.0"),
    ("apache 1.0", "Apache-1.0"),
    ("apache 1.1", "Apache-1.1"),
    ("apache 2", "Apache-2.0"),
    ("apache 2 license", "Apache-2.0"),
    ("apache 2.0", "Apache-2.0"),
    ("apache 2.0 license", "Apache-2.0"),
    ("apache 2.0 or mit", "Apache-2.0 OR MIT"),
    ("apache 2.0 with llvm exception", "Apache-2.0 WITH LLVM-exception"),
    ("apache 2.0/mit", "Apache-2.0 OR MIT"),
    ("apache license", "Apache-2.0"),
    ("apache license\nversion 2.0", "Apache-2.0"),
    ("apache license\nversion 2.0, january 2004", "Apache-2.0"),
    ("apache license (v2.0)", "Apache-2.0"),
    ("apache license 1.0", "Apache-1.0"),
    ("apache license 1.1", "Apache-1.1"),
    ("apache license 2", "Apache-2.0"),
    ("apache license 2.0", "Apache-2.0"),
    ("apache license 2.0 with llvm exceptions", "Apache-2.0 WITH LLVM-exception"),
    ("apache license v2", "Apache-2.0"),
    ("apache license v2.0", "Apache-2.0"),
    ("apache license v2.0 with llvm exceptions", "Apache-2.0 WITH LLVM-exception"),
    ("apache license version 2", "Apache-2.0"),
    ("apache license version 2.0", "Apache-2.0"),
    ("apache license, 2.0", "Apache-2.0"),
    ("apache license, version 2.0", "Apache-2.0"),
    ("apache license, version 2.0\nhttp://www.apache.org/licenses/license-2.0", "Apache-2.0"),
    ("apache license, version 2.0 and\n common development and distribution license (cddl) version 1.0", "Apache-2.0 AND CDDL-1.0"),
    ("apache public license 2.0", "Apache-2.0"),
    ("apache software license", "Apache-2.0"),
    ("apache software license - version 2.0", "Apache-2.0"),
    ("apache software license 2.0", "Apache-2.0"),
    ("apache software license, version 1.1", "Apache-1.1"),
    ("apache software license, version 2", "Apache-2.0"),
    ("apache software license, version 2.0", "Apache-2.0"),
    ("apache v2", "Apache-2.0"),
    ("apache-1", "Apache-1.0"),
    ("apache-1.1 license", "Apache-1.1"),
    ("apache-2", "Apache-2.0"),
    ("apache-2.0 / mit", "Apache-2.0 OR MIT"),
    ("apache-2.0 license", "Apache-2.0"),
    ("apache-2.0 license (apache-2.0)", "Apache-2.0"),
    ("apache-2.0 with llvm exception", "Apache-2.0 WITH LLVM-exception"),
    ("apache-2.0/mit", "Apache-2.0 OR MIT"),
    ("apache2", "Apache-2.0"),
    ("apl2", "Apache-2.0"),
    ("artistic", "Artistic-1.0"),
    ("artistic &amp; gpl", "Artistic-1.0-Perl OR GPL-1.0-or-later"),
    ("artistic 2.0", "Artistic-2.0"),
    ("artistic license", "Artistic-1.0"),
    ("artistic license 1.0", "Artistic-1.0"),
    ("artistic license 2.0", "Artistic-2.0"),
    ("artistic license, version 2.0", "Artistic-2.0"),
    ("artistic-2", "Artistic-2.0"),
    ("asl 2.0", "Apache-2.0"),
    ("asl, version 2", "Apache-2.0"),
    ("asl2", "Apache-2.0"),
    ("beer-ware license", "Beerware"),
    ("beerware", "Beerware"),
    ("boost", "BSL-1.0"),
    ("boost license", "BSL-1.0"),
    ("boost software license", "BSL-1.0"),
    ("boost software license 1.0", "BSL-1.0"),
    ("boost software license, version 1.0", "BSL-1.0"),
    ("bouncy castle licence", "MIT"),
    ("bouncy castle license", "MIT"),
    ("bsd", "BSD-3-Clause"),
    ("bsd (2-clause)", "BSD-2-Clause"),
    ("bsd (3-clause)", "BSD-3-Clause"),
    ("bsd 0-clause", "0BSD"),
    ("bsd 2 clause", "BSD-2-Clause"),
    ("bsd 2-clause", "BSD-2-Clause"),
    ("bsd 2-clause license", "BSD-2-Clause"),
    ("bsd 3 clause", "BSD-3-Clause"),
    ("bsd 3-clause", "BSD-3-Clause"),
    ("bsd 3-clause license", "BSD-3-Clause"),
    ("bsd 4-clause", "BSD-4-Clause"),
    ("bsd licence", "BSD-3-Clause"),
    ("bsd license", "BSD-3-Clause"),
    ("bsd new", "BSD-3-Clause"),
    ("bsd style", "BSD-3-Clause"),
    ("bsd three clause", "BSD-3-Clause"),
    ("bsd zero clause", "0BSD"),
    ("bsd-0", "0BSD"),
    ("bsd-2", "BSD-2-Clause"),
    ("bsd-2-clause license", "BSD-2-Clause"),
    ("bsd-2-clause-freebsd", "BSD-2-Clause"),
    ("bsd-2-clause-netbsd", "BSD-2-Clause"),
    ("bsd-3", "BSD-3-Clause"),
    ("bsd-3 clause", "BSD-3-Clause"),
    ("bsd-3-clause\nhttp://www.opensource.org/licenses/bsd-license.php", "BSD-3-Clause"),
    ("bsd-3-clause license", "BSD-3-Clause"),
    ("bsd-4", "BSD-4-Clause"),
    ("bsd-style", "BSD-3-Clause"),
    ("bsd-style license", "BSD-3-Clause"),
    ("bsl 1.0", "BSL-1.0"),
    ("bzip2 license", "bzip2-1.0.6"),
    ("cc by 3.0", "CC-BY-3.0"),
    ("cc by 4.0", "CC-BY-4.0"),
    ("cc by-sa 3.0", "CC-BY-SA-3.0"),
    ("cc by-sa 4.0", "CC-BY-SA-4.0"),
    ("cc-0", "CC0-1.0"),
    ("cc-by 3.0", "CC-BY-3.0"),
    ("cc-by 4.0", "CC-BY-4.0"),
    ("cc-by-3", "CC-BY-3.0"),
    ("cc-by-4", "CC-BY-4.0"),
    ("cc-by-sa-3", "CC-BY-SA-3.0"),
    ("cc-by-sa-4", "CC-BY-SA-4.0"),
    ("cc0", "CC0-1.0"),
    ("cc0 1.0", "CC0-1.0"),
    ("cc0 1.0 universal", "CC0-1.0"),
    ("cc0-1", "CC0-1.0"),
    ("cddl", "CDDL-1.0"),
    ("cddl + gpl license", "CDDL-1.0 OR GPL-2.0-only WITH Classpath-exception-2.0"),
    ("cddl + gplv2 with classpath exception", "CDDL-1.0 OR GPL-2.0-only WITH Classpath-exception-2.0"),
    ("cddl 1.0", "CDDL-1.0"),
    ("cddl 1.1", "CDDL-1.1"),
    ("cddl 1.1 + gplv2 with classpath exception", "CDDL-1.1 OR GPL-2.0-only WITH Classpath-exception-2.0"),
    ("cddl v1.0", "CDDL-1.0"),
    ("cddl v1.1", "CDDL-1.1"),
    ("cddl+gpl license", "CDDL-1.0 OR GPL-2.0-only WITH Classpath-exception-2.0"),
    ("cddl+gpl_1_1", "CDDL-1.1 OR GPL-2.0-only WITH Classpath-exception-2.0"),
    ("cddl-1", "CDDL-1.0"),
    ("cddl/gplv2+ce", "CDDL-1.0 OR GPL-2.0-only WITH Classpath-exception-2.0"),
    ("cddl/gplv2+ce 1.1", "CDDL-1.1 OR GPL-2.0-only WITH Classpath-exception-2.0"),
    ("cecill 2.1", "CeCILL-2.1"),
    ("cecill version 2.1", "CeCILL-2.1"),
    ("common development and distribution license", "CDDL-1.0"),
    ("common development and distribution license (cddl) v1.0", "CDDL-1.0"),
    ("common development and distribution license (cddl) v1.1", "CDDL-1.1"),
    ("common development and distribution license (cddl) version 1.0", "CDDL-1.0"),
    ("common development and distribution license (cddl), version 1.1", "CDDL-1.1"),
    ("common development and distribution license 1.0", "CDDL-1.0"),
    ("common development and distribution license 1.1", "CDDL-1.1"),
    ("common public license", "CPL-1.0"),
    ("common public license - v 1.0", "CPL-1.0"),
    ("common public license version 1.0", "CPL-1.0"),
    ("cpl", "CPL-1.0"),
    ("cpl 1.0", "CPL-1.0"),
    ("creative commons attribution 3.0", "CC-BY-3.0"),
    ("creative commons attribution 3.0 unported", "CC-BY-3.0"),
    ("creative commons attribution 4.0", "CC-BY-4.0"),
    ("creative commons attribution 4.0 international", "CC-BY-4.0"),
    ("creative commons attribution-sharealike 3.0", "CC-BY-SA-3.0"),
    ("creative commons attribution-sharealike 3.0 unported", "CC-BY-SA-3.0"),
    ("creative commons attribution-sharealike 4.0", "CC-BY-SA-4.0"),
    ("creative commons attribution-sharealike 4.0 international", "CC-BY-SA-4.0"),
    ("creative commons cc0", "CC0-1.0"),
    ("creative commons zero", "CC0-1.0"),
    ("curl license", "curl"),
    ("do what the f*ck you want to public license", "WTFPL"),
    ("dual bsd/gpl", "BSD-3-Clause OR GPL-2.0-only"),
    ("dual license consisting of the cddl v1.1 and gpl v2", "CDDL-1.1 OR GPL-2.0-only"),
    ("dual mit/apache-2.0", "MIT OR Apache-2.0"),
    ("dual mit/gpl", "MIT OR GPL-2.0-only"),
    ("eclipse distribution license - v 1.0", "BSD-3-Clause"),
    ("eclipse distribution license v. 1.0", "BSD-3-Clause"),
    ("eclipse distribution license, version 1.0", "BSD-3-Clause"),
    ("eclipse public license", "EPL-1.0"),
    ("eclipse public license (epl), version 1.0", "EPL-1.0"),
    ("eclipse public license - v 1.0", "EPL-1.0"),
    ("eclipse public license - v 1.0 and eclipse distribution license - v 1.0", "EPL-1.0 OR BSD-3-Clause"),
    ("eclipse public license - v 2.0", "EPL-2.0"),
    ("eclipse public license - version 1.0", "EPL-1.0"),
    ("eclipse public license - version 2.0", "EPL-2.0"),
    ("eclipse public license 1.0", "EPL-1.0"),
    ("eclipse public license 2.0", "EPL-2.0"),
    ("eclipse public license v1.0", "EPL-1.0"),
    ("eclipse public license v2.0", "EPL-2.0"),
    ("eclipse public license v2.0 or gplv2 with classpath exception", "EPL-2.0 OR GPL-2.0-only WITH Classpath-exception-2.0"),
    ("eclipse public license, version 1.0", "EPL-1.0"),
    ("eclipse public license, version 2.0", "EPL-2.0"),
    ("ecos-2.0", "GPL-2.0-or-later WITH eCos-exception-2.0"),
    ("edl 1.0", "BSD-3-Clause"),
    ("epl", "EPL-1.0"),
    ("epl 1.0", "EPL-1.0"),
    ("epl 2.0", "EPL-2.0"),
    ("epl v1.0", "EPL-1.0"),
    ("epl v2.0", "EPL-2.0"),
    ("epl-1", "EPL-1.0"),
    ("epl-2", "EPL-2.0"),
    ("eplv1", "EPL-1.0"),
    ("eplv2", "EPL-2.0"),
    ("eupl 1.1", "EUPL-1.1"),
    ("eupl 1.2", "EUPL-1.2"),
    ("european union public licence 1.1", "EUPL-1.1"),
    ("european union public licence 1.2", "EUPL-1.2"),
    ("european union public license 1.2", "EUPL-1.2"),
    ("expat", "MIT"),
    ("expat license", "MIT"),
    ("freebsd", "BSD-2-Clause"),
    ("freebsd license", "BSD-2-Clause"),
    ("fsf all permissive license", "FSFAP"),
    ("gfdl 1.2", "GFDL-1.2-only"),
    ("gfdl 1.3", "GFDL-1.3-only"),
    ("gfdl-1.1", "GFDL-1.1-only"),
    ("gfdl-1.2", "GFDL-1.2-only"),
    ("gfdl-1.3", "GFDL-1.3-only"),
    ("gnu affero general public license", "AGPL-3.0-or-later"),
    ("gnu affero general public license v3", "AGPL-3.0-only"),
    ("gnu affero general public license v3 (agplv3)", "AGPL-3.0-only"),
    ("gnu affero general public license v3 or later", "AGPL-3.0-or-later"),
    ("gnu affero general public license v3 or later (agplv3+)", "AGPL-3.0-or-later"),
    ("gnu affero general public license version 3", "AGPL-3.0-only"),
    ("gnu affero general public license, version 3", "AGPL-3.0-only"),
    ("gnu agpl", "AGPL-3.0-or-later"),
    ("gnu agpl v3", "AGPL-3.0-only"),
    ("gnu agplv3", "AGPL-3.0-only"),
    ("gnu free documentation license v1.2", "GFDL-1.2-only"),
    ("gnu free documentation license v1.3", "GFDL-1.3-only"),
    ("gnu free documentation license, version 1.3", "GFDL-1.3-only"),
    ("gnu general public license", "GPL-1.0-or-later"),
    ("gnu general public license (gpl)", "GPL-1.0-or-later"),
    ("gnu general public license (gpl), version 2", "GPL-2.0-only"),
    ("gnu general public license v2", "GPL-2.0-only"),
    ("gnu general public license v2 (gplv2)", "GPL-2.0-only"),
    ("gnu general public license v2 or later", "GPL-2.0-or-later"),
    ("gnu general public license v2 or later (gplv2+)", "GPL-2.0-or-later"),
    ("gnu general public license v2.0", "GPL-2.0-only"),
    ("gnu general public license v3", "GPL-3.0-only"),
    ("gnu general public license v3 (gplv3)", "GPL-3.0-only"),
    ("gnu general public license v3 or later", "GPL-3.0-or-later"),
    ("gnu general public license v3 or later (gplv3+)", "GPL-3.0-or-later"),
    ("gnu general public license v3.0", "GPL-3.0-only"),
    ("gnu general public license version 2", "GPL-2.0-only"),
    ("gnu general public license version 2 or later", "GPL-2.0-or-later"),
    ("gnu general public license version 3", "GPL-3.0-only"),
    ("gnu general public license version 3 or later", "GPL-3.0-or-later"),
    ("gnu general public license, version 2", "GPL-2.0-only"),
    ("gnu general public license, version 2 or later", "GPL-2.0-or-later"),
    ("gnu general public license, version 2 with the classpath exception", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gnu general public license, version 2 with the gnu classpath exception", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gnu general public license, version 2.0", "GPL-2.0-only"),
    ("gnu general public license, version 3", "GPL-3.0-only"),
    ("gnu general public license, version 3 or later", "GPL-3.0-or-later"),
    ("gnu general public license, version 3, 29 june 2007", "GPL-3.0-only"),
    ("gnu general public license, version 3.0", "GPL-3.0-only"),
    ("gnu gpl", "GPL-1.0-or-later"),
    ("gnu gpl v2", "GPL-2.0-only"),
    ("gnu gpl v2 or later", "GPL-2.0-or-later"),
    ("gnu gpl v3", "GPL-3.0-only"),
    ("gnu gpl v3 or later", "GPL-3.0-or-later"),
    ("gnu gplv2", "GPL-2.0-only"),
    ("gnu gplv3", "GPL-3.0-only"),
    ("gnu lesser general public license", "LGPL-2.0-or-later"),
    ("gnu lesser general public license (lgpl), version 2.1", "LGPL-2.1-only"),
    ("gnu lesser general public license v2 or later (lgplv2+)", "LGPL-2.0-or-later"),
    ("gnu lesser general public license v2.1", "LGPL-2.1-only"),
    ("gnu lesser general public license v2.1 only", "LGPL-2.1-only"),
    ("gnu lesser general public license v2.1 or later", "LGPL-2.1-or-later"),
    ("gnu lesser general public license v3", "LGPL-3.0-only"),
    ("gnu lesser general public license v3 (lgplv3)", "LGPL-3.0-only"),
    ("gnu lesser general public license v3 or later", "LGPL-3.0-or-later"),
    ("gnu lesser general public license v3 or later (lgplv3+)", "LGPL-3.0-or-later"),
    ("gnu lesser general public license v3.0", "LGPL-3.0-only"),
    ("gnu lesser general public license version 2.1", "LGPL-2.1-only"),
    ("gnu lesser general public license version 3", "LGPL-3.0-only"),
    ("gnu lesser general public license, version 2.1", "LGPL-2.1-only"),
    ("gnu lesser general public license, version 2.1 or later", "LGPL-2.1-or-later"),
    ("gnu lesser general public license, version 3", "LGPL-3.0-only"),
    ("gnu lesser general public license, version 3 or later", "LGPL-3.0-or-later"),
    ("gnu lgpl", "LGPL-2.0-or-later"),
    ("gnu lgpl v2.1", "LGPL-2.1-only"),
    ("gnu lgpl v3", "LGPL-3.0-only"),
    ("gnu lgplv3", "LGPL-3.0-only"),
    ("gnu library general public license", "LGPL-2.0-or-later"),
    ("gnu library general public license v2", "LGPL-2.0-only"),
    ("gnu library general public license v2 or later", "LGPL-2.0-or-later"),
    ("gnu library general public license, version 2", "LGPL-2.0-only"),
    ("gnu library or lesser general public license (lgpl)", "LGPL-2.0-or-later"),
    ("gnu public license", "GPL-1.0-or-later"),
    ("go license", "BSD-3-Clause"),
    ("gpl", "GPL-1.0-or-later"),
    ("gpl 2", "GPL-2.0-only"),
    ("gpl 2+", "GPL-2.0-or-later"),
    ("gpl 2.0", "GPL-2.0-only"),
    ("gpl 3", "GPL-3.0-only"),
    ("gpl 3+", "GPL-3.0-or-later"),
    ("gpl 3.0", "GPL-3.0-only"),
    ("gpl v2", "GPL-2.0-only"),
    ("gpl v2 or later", "GPL-2.0-or-later"),
    ("gpl v2 with classpath exception", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gpl v2+", "GPL-2.0-or-later"),
    ("gpl v3", "GPL-3.0-only"),
    ("gpl v3 or later", "GPL-3.0-or-later"),
    ("gpl v3+", "GPL-3.0-or-later"),
    ("gpl version 2", "GPL-2.0-only"),
    ("gpl version 3", "GPL-3.0-only"),
    ("gpl with autoconf exception", "GPL-2.0-or-later WITH Autoconf-exception-2.0"),
    ("gpl+artistic", "Artistic-1.0-Perl OR GPL-1.0-or-later"),
    ("gpl-1.0", "GPL-1.0-only"),
    ("gpl-1.0+", "GPL-1.0-or-later"),
    ("gpl-2", "GPL-2.0-only"),
    ("gpl-2+", "GPL-2.0-or-later"),
    ("gpl-2.0", "GPL-2.0-only"),
    ("gpl-2.0 or later", "GPL-2.0-or-later"),
    ("gpl-2.0 with classpath exception", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gpl-2.0 with linux syscall note", "GPL-2.0-only WITH Linux-syscall-note"),
    ("gpl-2.0+", "GPL-2.0-or-later"),
    ("gpl-2.0-with-autoconf-exception", "GPL-2.0-only WITH Autoconf-exception-2.0"),
    ("gpl-2.0-with-bison-exception", "GPL-2.0-or-later WITH Bison-exception-2.2"),
    ("gpl-2.0-with-classpath-exception", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gpl-2.0-with-font-exception", "GPL-2.0-only WITH Font-exception-2.0"),
    ("gpl-2.0-with-gcc-exception", "GPL-2.0-only WITH GCC-exception-2.0"),
    ("gpl-3", "GPL-3.0-only"),
    ("gpl-3+", "GPL-3.0-or-later"),
    ("gpl-3.0", "GPL-3.0-only"),
    ("gpl-3.0 or later", "GPL-3.0-or-later"),
    ("gpl-3.0 with gcc runtime library exception", "GPL-3.0-or-later WITH GCC-exception-3.1"),
    ("gpl-3.0+", "GPL-3.0-or-later"),
    ("gpl-3.0-with-autoconf-exception", "GPL-3.0-only WITH Autoconf-exception-3.0"),
    ("gpl-3.0-with-gcc-exception", "GPL-3.0-only WITH GCC-exception-3.1"),
    ("gpl2", "GPL-2.0-only"),
    ("gpl2 w/ cpe", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gpl2 with classpath exception", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gpl3", "GPL-3.0-only"),
    ("gplv2", "GPL-2.0-only"),
    ("gplv2 or later", "GPL-2.0-or-later"),
    ("gplv2 with classpath exception", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gplv2 with linux-syscall-note", "GPL-2.0-only WITH Linux-syscall-note"),
    ("gplv2+", "GPL-2.0-or-later"),
    ("gplv2+ce", "GPL-2.0-only WITH Classpath-exception-2.0"),
    ("gplv3", "GPL-3.0-only"),
    ("gplv3 or later", "GPL-3.0-or-later"),
    ("gplv3 with gcc runtime library exception", "GPL-3.0-or-later WITH GCC-exception-3.1"),
    ("gplv3+", "GPL-3.0-or-later"),
    ("h2 license", "MPL-2.0 OR EPL-1.0"),
    ("http://creativecommons.org/publicdomain/zero/1.0/", "CC0-1.0"),
    ("http://json.org/license.html", "JSON"),
    ("http://opensource.org/licenses/bsd-2-clause", "BSD-2-Clause"),
    ("http://opensource.org/licenses/bsd-3-clause", "BSD-3-Clause"),
    ("http://opensource.org/licenses/mit", "MIT"),
    ("http://opensource.org/licenses/mit-license.php", "MIT"),
    ("http://unlicense.org", "Unlicense"),
    ("http://unlicense.org/", "Unlicense"),
    ("http://www.apache.org/licenses/license-2.0", "Apache-2.0"),
    ("http://www.apache.org/licenses/license-2.0.html", "Apache-2.0"),
    ("http://www.apache.org/licenses/license-2.0.txt", "Apache-2.0"),
    ("http://www.eclipse.org/legal/epl-v10.html", "EPL-1.0"),
    ("http://www.eclipse.org/legal/epl-v20.html", "EPL-2.0"),
    ("http://www.gnu.org/licenses/agpl-3.0.html", "AGPL-3.0-only"),
    ("http://www.gnu.org/licenses/gpl-2.0.html", "GPL-2.0-only"),
    ("http://www.gnu.org/licenses/gpl-3.0.html", "GPL-3.0-only"),
    ("http://www.gnu.org/licenses/gpl.html", "GPL-3.0-only"),
    ("http://www.gnu.org/licenses/lgpl-2.1.html", "LGPL-2.1-only"),
    ("http://www.gnu.org/licenses/lgpl-3.0.html", "LGPL-3.0-only"),
    ("http://www.gnu.org/licenses/lgpl.html", "LGPL-3.0-only"),
    ("http://www.gnu.org/licenses/old-licenses/gpl-2.0.html", "GPL-2.0-only"),
    ("http://www.gnu.org/licenses/old-licenses/lgpl-2.1.html", "LGPL-2.1-only"),
    ("http://www.json.org/license.html", "JSON"),
    ("http://www.mozilla.org/mpl/2.0/", "MPL-2.0"),
    ("http://www.opensource.org/licenses/apache2.0.php", "Apache-2.0"),
    ("http://www.opensource.org/licenses/bsd-license.php", "BSD-3-Clause"),
    ("http://www.opensource.org/licenses/mit-license", "MIT"),
    ("http://www.opensource.org/licenses/mit-license.php", "MIT"),
    ("https://creativecommons.org/publicdomain/zero/1.0/", "CC0-1.0"),
    ("https://mozilla.org/mpl/2.0/", "MPL-2.0"),
    ("https://opensource.org/license/mit/", "MIT"),
    ("https://opensource.org/licenses/bsd-2-clause", "BSD-2-Clause"),
    ("https://opensource.org/licenses/bsd-3-clause", "BSD-3-Clause"),
    ("https://opensource.org/licenses/mit", "MIT"),
    ("https://opensource.org/licenses/mit-license.php", "MIT"),
    ("https://unlicense.org", "Unlicense"),
    ("https://www.apache.org/licenses/license-2.0", "Apache-2.0"),
    ("https://www.apache.org/licenses/license-2.0.html", "Apache-2.0"),
    ("https://www.apache.org/licenses/license-2.0.txt", "Apache-2.0"),
    ("https://www.eclipse.org/legal/epl-2.0/", "EPL-2.0"),
    ("https://www.eclipse.org/legal/epl-v20.html", "EPL-2.0"),
    ("https://www.gnu.org/licenses/agpl-3.0.html", "AGPL-3.0-only"),
    ("https://www.gnu.org/licenses/gpl-2.0.html", "GPL-2.0-only"),
    ("https://www.gnu.org/licenses/gpl-3.0.html", "GPL-3.0-only"),
    ("https://www.gnu.org/licenses/lgpl-3.0.html", "LGPL-3.0-only"),
    ("https://www.gnu.org/licenses/old-licenses/lgpl-2.1.html", "LGPL-2.1-only"),
    ("https://www.mozilla.org/en-us/mpl/2.0/", "MPL-2.0"),
    ("ibm public license", "IPL-1.0"),
    ("ibm public license version 1.0", "IPL-1.0"),
    ("ijg license", "IJG"),
    ("illinois/ncsa open source license", "NCSA"),
    ("imagemagick license", "ImageMagick"),
    ("independent jpeg group license", "IJG"),
    ("indiana university extreme! lab software license", "xpp"),
    ("ipl 1.0", "IPL-1.0"),
    ("isc licence", "ISC"),
    ("isc license", "ISC"),
    ("isc license (iscl)", "ISC"),
    ("jquery license", "MIT"),
    ("json license", "JSON"),
    ("lesser general public license (lgpl)", "LGPL-2.0-or-later"),
    ("lgpl", "LGPL-2.0-or-later"),
    ("lgpl 2", "LGPL-2.0-only"),
    ("lgpl 2+", "LGPL-2.0-or-later"),
    ("lgpl 2.0", "LGPL-2.0-only"),
    ("lgpl 2.1", "LGPL-2.1-only"),
    ("lgpl 2.1 or later", "LGPL-2.1-or-later"),
    ("lgpl 2.1+", "LGPL-2.1-or-later"),
    ("lgpl 3", "LGPL-3.0-only"),
    ("lgpl 3+", "LGPL-3.0-or-later"),
    ("lgpl 3.0", "LGPL-3.0-only"),
    ("lgpl 3.0 or later", "LGPL-3.0-or-later"),
    ("lgpl v2.1", "LGPL-2.1-only"),
    ("lgpl v2.1 or later", "LGPL-2.1-or-later"),
    ("lgpl v3", "LGPL-3.0-only"),
    ("lgpl-2", "LGPL-2.0-only"),
    ("lgpl-2.0", "LGPL-2.0-only"),
    ("lgpl-2.0+", "LGPL-2.0-or-later"),
    ("lgpl-2.1", "LGPL-2.1-only"),
    ("lgpl-2.1+", "LGPL-2.1-or-later"),
    ("lgpl-2.1-only license", "LGPL-2.1-only"),
    ("lgpl-3", "LGPL-3.0-only"),
    ("lgpl-3+", "LGPL-3.0-or-later"),
    ("lgpl-3.0", "LGPL-3.0-only"),
    ("lgpl-3.0+", "LGPL-3.0-or-later"),
    ("lgpl2", "LGPL-2.0-only"),
    ("lgpl2.1", "LGPL-2.1-only"),
    ("lgpl3", "LGPL-3.0-only"),
    ("lgplv2", "LGPL-2.0-only"),
    ("lgplv2+", "LGPL-2.0-or-later"),
    ("lgplv2.1", "LGPL-2.1-only"),
    ("lgplv2.1 or later", "LGPL-2.1-or-later"),
    ("lgplv2.1+", "LGPL-2.1-or-later"),
    ("lgplv3", "LGPL-3.0-only"),
    ("lgplv3 or later", "LGPL-3.0-or-later"),
    ("lgplv3+", "LGPL-3.0-or-later"),
    ("libpng license", "Libpng"),
    ("libtiff license", "libtiff"),
    ("lzma sdk is placed in the public domain.", "LicenseRef-public-domain"),
    ("microsoft public license", "MS-PL"),
    ("microsoft reciprocal license", "MS-RL"),
    ("mit &amp; apache-2.0", "MIT AND Apache-2.0"),
    ("mit / apache-2.0", "MIT OR Apache-2.0"),
    ("mit licence", "MIT"),
    ("mit license", "MIT"),
    ("mit license (mit)", "MIT"),
    ("mit licensed", "MIT"),
    ("mit no attribution", "MIT-0"),
    ("mit or apache 2.0", "MIT OR Apache-2.0"),
    ("mit style", "MIT"),
    ("mit style license", "MIT"),
    ("mit x11", "MIT OR X11"),
    ("mit-0 license", "MIT-0"),
    ("mit-license", "MIT"),
    ("mit-style", "MIT"),
    ("mit-style license", "MIT"),
    ("mit/apache 2.0", "MIT OR Apache-2.0"),
    ("mit/apache-2.0", "MIT OR Apache-2.0"),
    ("mit/expat", "MIT"),
    ("mit/x11", "MIT OR X11"),
    ("mit/x11 license", "MIT OR X11"),
    ("modified bsd", "BSD-3-Clause"),
    ("modified bsd license", "BSD-3-Clause"),
    ("mozilla public license", "MPL-2.0"),
    ("mozilla public license 1.0", "MPL-1.0"),
    ("mozilla public license 1.1", "MPL-1.1"),
    ("mozilla public license 1.1 (mpl 1.1) &amp; gnu lesser general public license 2.1 (lgpl 2.1)", "MPL-1.1 OR LGPL-2.1-only"),
    ("mozilla public license 2.0", "MPL-2.0"),
    ("mozilla public license 2.0 (mpl 2.0)", "MPL-2.0"),
    ("mozilla public license version 1.1", "MPL-1.1"),
    ("mozilla public license version 2.0", "MPL-2.0"),
    ("mozilla public license, version 1.1", "MPL-1.1"),
    ("mozilla public license, version 2.0", "MPL-2.0"),
    ("mpl", "MPL-2.0"),
    ("mpl 1.0", "MPL-1.0"),
    ("mpl 1.1", "MPL-1.1"),
    ("mpl 1.1/gpl 2.0/lgpl 2.1", "MPL-1.1 OR GPL-2.0-only OR LGPL-2.1-only"),
    ("mpl 2", "MPL-2.0"),
    ("mpl 2.0", "MPL-2.0"),
    ("mpl 2.0 or epl 1.0", "MPL-2.0 OR EPL-1.0"),
    ("mpl v1.1", "MPL-1.1"),
    ("mpl v2", "MPL-2.0"),
    ("mpl v2.0", "MPL-2.0"),
    ("mpl-1", "MPL-1.0"),
    ("mpl-2", "MPL-2.0"),
    ("mpl2", "MPL-2.0"),
    ("mplv1.1", "MPL-1.1"),
    ("mplv2", "MPL-2.0"),
    ("mplv2.0", "MPL-2.0"),
    ("ms-pl license", "MS-PL"),
    ("mulan permissive software license, version 2", "MulanPSL-2.0"),
    ("mulan psl v2", "MulanPSL-2.0"),
    ("ncsa license", "NCSA"),
    ("new bsd", "BSD-3-Clause"),
    ("new bsd license", "BSD-3-Clause"),
    ("new bsd license (bsd)", "BSD-3-Clause"),
    ("nunit", "zlib-acknowledgement"),
    ("ofl", "OFL-1.1"),
    ("ofl 1.1", "OFL-1.1"),
    ("open font license", "OFL-1.1"),
    ("open software license 3.0", "OSL-3.0"),
    ("openldap public license", "OLDAP-2.8"),
    ("openssl license", "OpenSSL"),
    ("original bsd", "BSD-4-Clause"),
    ("original bsd license", "BSD-4-Clause"),
    ("osl 3.0", "OSL-3.0"),
    ("perl 5", "Artistic-1.0-Perl OR GPL-1.0-or-later"),
    ("perl artistic license", "Artistic-1.0-Perl"),
    ("perl license", "Artistic-1.0-Perl OR GPL-1.0-or-later"),
    ("perl5", "Artistic-1.0-Perl OR GPL-1.0-or-later"),
    ("perl_5", "Artistic-1.0-Perl OR GPL-1.0-or-later"),
    ("php 3.01", "PHP-3.01"),
    ("php license", "PHP-3.01"),
    ("php license 3.0", "PHP-3.0"),
    ("php license 3.01", "PHP-3.01"),
    ("postgresql license", "PostgreSQL"),
    ("psf", "PSF-2.0"),
    ("psf license", "PSF-2.0"),
    ("psfl", "PSF-2.0"),
    ("public domain", "LicenseRef-public-domain"),
    ("public domain (cc0-1.0)", "CC0-1.0"),
    ("public domain, per creative commons cc0", "CC0-1.0"),
    ("public-domain", "LicenseRef-public-domain"),
    ("publicdomain", "LicenseRef-public-domain"),
    ("python software foundation license", "PSF-2.0"),
    ("python software foundation license 2.0", "PSF-2.0"),
    ("q public license 1.0", "QPL-1.0"),
    ("qpl 1.0", "QPL-1.0"),
    ("revised bsd", "BSD-3-Clause"),
    ("revised bsd license", "BSD-3-Clause"),
    ("ruby license", "Ruby"),
    ("same as perl", "Artistic-1.0-Perl OR GPL-1.0-or-later"),
    ("sil open font license 1.1", "OFL-1.1"),
    ("sil open font license, version 1.1", "OFL-1.1"),
    ("simplified bsd", "BSD-2-Clause"),
    ("simplified bsd license", "BSD-2-Clause"),
    ("sleepycat license", "Sleepycat"),
    ("standardml-nj", "SMLNJ"),
    ("the apache license version 2.0", "Apache-2.0"),
    ("the apache license, version 2.0", "Apache-2.0"),
    ("the apache software license, version 2.0", "Apache-2.0"),
    ("the artistic license 2.0", "Artistic-2.0"),
    ("the bsd 2-clause license", "BSD-2-Clause"),
    ("the bsd 3-clause license", "BSD-3-Clause"),
    ("the isc license", "ISC"),
    ("the json license", "JSON"),
    ("the mit license", "MIT"),
    ("the mit license\nhttp://www.opensource.org/licenses/mit-license.php", "MIT"),
    ("the mit license (mit)", "MIT"),
    ("the new bsd license", "BSD-3-Clause"),
    ("the perl 5 license", "Artistic-1.0-Perl OR GPL-1.0-or-later"),
    ("the universal permissive license (upl), version 1.0", "UPL-1.0"),
    ("the unlicense", "Unlicense"),
    ("the zlib/libpng license", "Zlib"),
    ("tmate open source license", "TMate"),
    ("universal permissive license", "UPL-1.0"),
    ("university of illinois/ncsa open source license", "NCSA"),
    ("unlicense (unlicense)", "Unlicense"),
    ("upl", "UPL-1.0"),
    ("upl 1.0", "UPL-1.0"),
    ("vim license", "Vim"),
    ("w3c license", "W3C"),
    ("w3c software license", "W3C"),
    ("wtfpl license", "WTFPL"),
    ("wxwindows", "GPL-2.0-or-later WITH WxWindows-exception-3.1"),
    ("wxwindows library licence", "LGPL-2.0-or-later WITH WxWindows-exception-3.1"),
    ("wxwindows library license", "LGPL-2.0-or-later WITH WxWindows-exception-3.1"),
    ("x11 license", "X11"),
    ("zero-clause bsd", "0BSD"),
    ("zlib license", "Zlib"),
    ("zlib/libpng", "Zlib"),
    ("zlib/libpng license", "Zlib"),
    ("zope public license 2.1", "ZPL-2.1"),
    ("zpl 2.1", "ZPL-2.1"),
];
