mod modes_test;
